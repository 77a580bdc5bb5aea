//! Maps loosely named spreadsheet columns onto the fields of an `ExtractedPerson`.
//!
//! Each target field has an ordered list of column names it may come from. The
//! first listed column holding a non-blank value wins. When no first or last
//! name column matches, a single `Name` column is split on its first space.

use outreach_common::model::raw_row::RawRow;
use outreach_common::model::supporter::ExtractedPerson;
use rayon::prelude::*;

pub const FIRST_NAME_ALIASES: &[&str] = &["First Name", "first_name", "FirstName"];
pub const LAST_NAME_ALIASES: &[&str] = &["Last Name", "last_name", "LastName"];
/// Holds "first rest-of-name" when the sheet has no separate name columns.
pub const FULL_NAME_COLUMN: &str = "Name";
pub const EMAIL_ALIASES: &[&str] = &["Email", "email", "Email Address", "email_address"];
pub const EDUCATION_ALIASES: &[&str] = &["Education", "education", "School", "University", "Degree"];
pub const EXPERIENCE_ALIASES: &[&str] = &[
    "Experience",
    "experience",
    "Work",
    "Job",
    "Position",
    "Title",
];
pub const COMPANY_ALIASES: &[&str] = &["Company", "company", "Organization", "Employer"];

/// Returns the trimmed value of the first alias present with non-blank content.
fn probe<'a>(row: &'a RawRow, aliases: &[&str]) -> Option<&'a str> {
    aliases
        .iter()
        .filter_map(|alias| row.get(alias))
        .map(str::trim)
        .find(|value| !value.is_empty())
}

/// Splits the `Name` column into `(first, rest)`. `rest` is empty for a single word.
fn split_full_name(row: &RawRow) -> (&str, &str) {
    let name = row.get(FULL_NAME_COLUMN).map(str::trim).unwrap_or_default();
    match name.split_once(' ') {
        Some((first, rest)) => (first, rest.trim()),
        None => (name, ""),
    }
}

/// Extracts one person from one row. Never fails: unmatched fields are empty.
pub fn extract_person(row: &RawRow) -> ExtractedPerson {
    let (name_first, name_rest) = split_full_name(row);
    let field = |aliases: &[&str]| probe(row, aliases).unwrap_or_default().to_string();

    ExtractedPerson {
        first_name: probe(row, FIRST_NAME_ALIASES)
            .unwrap_or(name_first)
            .to_string(),
        last_name: probe(row, LAST_NAME_ALIASES)
            .unwrap_or(name_rest)
            .to_string(),
        email: field(EMAIL_ALIASES),
        education: field(EDUCATION_ALIASES),
        experience: field(EXPERIENCE_ALIASES),
        company: field(COMPANY_ALIASES),
    }
}

/// Extracts every row, keeping file order.
pub fn extract_all(rows: &[RawRow]) -> Vec<ExtractedPerson> {
    rows.par_iter().map(extract_person).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, &str)]) -> RawRow {
        cells.iter().copied().collect()
    }

    #[test]
    fn name_column_splits_on_first_space() {
        let p = extract_person(&row(&[("Name", "Jane Doe")]));
        assert_eq!(p.first_name, "Jane");
        assert_eq!(p.last_name, "Doe");
    }

    #[test]
    fn name_column_keeps_the_remainder_as_last_name() {
        let p = extract_person(&row(&[("Name", "  Mary Ann  van Dyke ")]));
        assert_eq!(p.first_name, "Mary");
        assert_eq!(p.last_name, "Ann  van Dyke");
    }

    #[test]
    fn single_word_name_has_no_last_name() {
        let p = extract_person(&row(&[("Name", "Cher")]));
        assert_eq!(p.first_name, "Cher");
        assert_eq!(p.last_name, "");
        assert!(!p.has_full_name());
    }

    #[test]
    fn explicit_columns_beat_the_name_column() {
        let p = extract_person(&row(&[
            ("Name", "Wrong Person"),
            ("first_name", " Ada "),
            ("LastName", "Lovelace"),
        ]));
        assert_eq!(p.first_name, "Ada");
        assert_eq!(p.last_name, "Lovelace");
    }

    #[test]
    fn aliases_are_probed_in_order() {
        let p = extract_person(&row(&[
            ("Title", "Organizer"),
            ("Experience", "Ten years of canvassing"),
            ("Employer", "Acme"),
            ("Company", "Food Bank"),
        ]));
        assert_eq!(p.experience, "Ten years of canvassing");
        assert_eq!(p.company, "Food Bank");
    }

    #[test]
    fn blank_alias_falls_through_to_the_next_one() {
        let p = extract_person(&row(&[
            ("Email", "   "),
            ("email_address", "kay@example.org"),
        ]));
        assert_eq!(p.email, "kay@example.org");
    }

    #[test]
    fn rows_without_name_columns_extract_empty_names() {
        let p = extract_person(&row(&[("email", "x@y.org"), ("University", "MIT")]));
        assert_eq!(p.first_name, "");
        assert_eq!(p.last_name, "");
        assert_eq!(p.education, "MIT");
    }

    #[test]
    fn empty_row_extracts_empty_person() {
        assert_eq!(extract_person(&RawRow::new()), ExtractedPerson::default());
    }

    #[test]
    fn column_names_are_case_sensitive() {
        let p = extract_person(&row(&[("FIRST NAME", "Ann"), ("last name", "Bell")]));
        assert_eq!(p.first_name, "");
        assert_eq!(p.last_name, "");
    }

    #[test]
    fn extract_all_preserves_order() {
        let rows: Vec<RawRow> = (0..50)
            .map(|i| row(&[("First Name", format!("P{}", i).as_str()), ("Last Name", "X")]))
            .collect();
        let people = extract_all(&rows);
        assert_eq!(people.len(), 50);
        assert_eq!(people[0].first_name, "P0");
        assert_eq!(people[49].first_name, "P49");
    }
}
