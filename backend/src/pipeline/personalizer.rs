//! Renders a template for each selected supporter.
//!
//! Placeholders are written `{{token}}`. Known tokens are replaced everywhere
//! they occur, independently in the subject and in the content; unknown tokens
//! stay in the output exactly as written. Substituted values are never scanned
//! again, so a supporter field that itself looks like a token is emitted as is.
//! Output depends only on the template and the supporter snapshot.

use crate::error::{PipelineError, Result};
use crate::pipeline::selection::SelectionSet;
use log::info;
use outreach_common::model::message::PersonalizedMessage;
use outreach_common::model::supporter::Supporter;
use outreach_common::model::template::Template;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

pub const FALLBACK_ORGANIZATION: &str = "your organization";
pub const FALLBACK_EDUCATION: &str = "your background";
pub const FALLBACK_EXPERIENCE: &str = "your experience";

/// Anything between double braces. Whether it is a known token is decided
/// by [`Token::from_name`].
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]*)\}\}").expect("placeholder pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    FirstName,
    LastName,
    FullName,
    Organization,
    Education,
    Experience,
}

impl Token {
    pub const ALL: [Token; 6] = [
        Token::FirstName,
        Token::LastName,
        Token::FullName,
        Token::Organization,
        Token::Education,
        Token::Experience,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Token::FirstName => "first_name",
            Token::LastName => "last_name",
            Token::FullName => "full_name",
            Token::Organization => "organization",
            Token::Education => "education",
            Token::Experience => "experience",
        }
    }

    /// Exact, case-sensitive match on the text between the braces.
    pub fn from_name(name: &str) -> Option<Token> {
        Token::ALL.into_iter().find(|token| token.name() == name)
    }

    pub fn resolve<'a>(&self, supporter: &'a Supporter) -> Cow<'a, str> {
        fn or_fallback<'a>(value: &'a str, fallback: &'static str) -> Cow<'a, str> {
            if value.is_empty() {
                Cow::Borrowed(fallback)
            } else {
                Cow::Borrowed(value)
            }
        }

        match self {
            Token::FirstName => Cow::Borrowed(&supporter.first_name),
            Token::LastName => Cow::Borrowed(&supporter.last_name),
            Token::FullName => Cow::Owned(supporter.full_name()),
            Token::Organization => or_fallback(&supporter.organization, FALLBACK_ORGANIZATION),
            Token::Education => or_fallback(&supporter.education, FALLBACK_EDUCATION),
            Token::Experience => or_fallback(&supporter.experience, FALLBACK_EXPERIENCE),
        }
    }
}

/// Substitutes every known token in `text`.
pub fn render(text: &str, supporter: &Supporter) -> String {
    PLACEHOLDER_RE
        .replace_all(text, |caps: &Captures| match Token::from_name(&caps[1]) {
            Some(token) => token.resolve(supporter).into_owned(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Placeholder names used by a template, subject first, each listed once.
pub fn template_tokens(template: &Template) -> Vec<String> {
    let subject = template.subject.as_deref().unwrap_or_default();
    let mut tokens: Vec<String> = Vec::new();
    for text in [subject, template.content.as_str()] {
        for caps in PLACEHOLDER_RE.captures_iter(text) {
            let name = &caps[1];
            if !tokens.iter().any(|t| t == name) {
                tokens.push(name.to_string());
            }
        }
    }
    tokens
}

/// Placeholders that would leak into outgoing messages verbatim.
pub fn unrecognized_tokens(template: &Template) -> Vec<String> {
    template_tokens(template)
        .into_iter()
        .filter(|name| Token::from_name(name).is_none())
        .collect()
}

pub fn personalize_one(template: &Template, supporter: &Supporter) -> PersonalizedMessage {
    let subject = template.subject.as_deref().unwrap_or_default();
    PersonalizedMessage {
        supporter_id: supporter.id.clone(),
        supporter: supporter.clone(),
        template: template.clone(),
        rendered_subject: render(subject, supporter),
        rendered_content: render(&template.content, supporter),
    }
}

/// Renders `template` for every selected supporter present in `supporters`.
///
/// Refuses to run on an empty selection or a missing template. Selected ids
/// with no matching supporter are skipped. Messages follow the order of
/// `supporters`.
pub fn personalize(
    template_id: &str,
    template: Option<&Template>,
    selection: &SelectionSet,
    supporters: &[Supporter],
) -> Result<Vec<PersonalizedMessage>> {
    if selection.is_empty() {
        return Err(PipelineError::EmptySelection);
    }
    let template = template.ok_or_else(|| PipelineError::TemplateNotFound(template_id.to_string()))?;

    let messages: Vec<PersonalizedMessage> = supporters
        .iter()
        .filter(|s| selection.contains(&s.id))
        .map(|s| personalize_one(template, s))
        .collect();

    info!(
        "personalized template {} for {} of {} selected supporters",
        template.id,
        messages.len(),
        selection.len()
    );
    Ok(messages)
}
