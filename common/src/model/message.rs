use crate::model::supporter::Supporter;
use crate::model::template::Template;
use serde::{Deserialize, Serialize};

/// One template rendered for one supporter.
///
/// Both the supporter and the template are snapshots taken at render time;
/// later edits to either never show up in an existing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedMessage {
    pub supporter_id: String,
    pub supporter: Supporter,
    pub template: Template,
    pub rendered_subject: String,
    pub rendered_content: String,
}
