//! PersonCard - Text rendering of a single contact
//!
//! The card first binds each field of a [`Person`] to a label, then lays the
//! labels out within a column budget. Financial plans and tags are listed
//! alphabetically and flow across lines like chips.

use addressbook_domain::Person;
use console::{measure_text_width, style};

/// Body lines are indented under the index
const INDENT: &str = "   ";

/// A displayed contact with all of its labels resolved
#[derive(Debug, Clone)]
pub struct PersonCard {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub email: String,
    pub next_of_kin_name: String,
    pub next_of_kin_phone: String,
    pub appointment: String,
    pub financial_plans: Vec<String>,
    pub tags: Vec<String>,
    pub remark: Option<String>,
}

impl PersonCard {
    /// Bind `person`'s fields to labels. `displayed_index` is one-based.
    pub fn new(person: &Person, displayed_index: usize) -> Self {
        let mut financial_plans: Vec<String> = person
            .financial_plans()
            .iter()
            .map(|plan| plan.financial_plan_name().to_string())
            .collect();
        financial_plans.sort();

        let mut tags: Vec<String> = person
            .tags()
            .iter()
            .map(|tag| tag.tag_name().to_string())
            .collect();
        tags.sort();

        let appointment = match person.appointment() {
            Some(appointment) => appointment.to_string(),
            None => "None".to_string(),
        };

        Self {
            id: format!("{}. ", displayed_index),
            name: person.name().full_name().to_string(),
            phone: person.phone().as_str().to_string(),
            address: person.address().as_str().to_string(),
            email: person.email().as_str().to_string(),
            next_of_kin_name: format!("Next-of-kin: {}", person.next_of_kin_name().full_name()),
            next_of_kin_phone: format!("Next-of-kin Phone: {}", person.next_of_kin_phone()),
            appointment: format!("Appointment: {}", appointment),
            financial_plans,
            tags,
            remark: (!person.remark().is_empty())
                .then(|| format!("Remark: {}", person.remark())),
        }
    }

    /// Render the card so that no line is wider than `max_width` columns
    pub fn render(&self, max_width: usize) -> String {
        // Too narrow to indent: body lines start at the left edge
        let indent = if max_width > INDENT.len() { INDENT } else { "" };
        let body_width = max_width.saturating_sub(indent.len()).max(1);
        let mut lines = Vec::new();

        let header = format!("{}{}", self.id, self.name);
        for line in wrap_label(&header, max_width.max(1)) {
            lines.push(style(line).bold().to_string());
        }

        for label in [
            &self.phone,
            &self.address,
            &self.email,
            &self.next_of_kin_name,
            &self.next_of_kin_phone,
            &self.appointment,
        ] {
            for line in wrap_label(label, body_width) {
                lines.push(format!("{}{}", indent, line));
            }
        }

        for line in flow_chips(&self.financial_plans, body_width) {
            lines.push(format!("{}{}", indent, style(line).cyan()));
        }
        for line in flow_chips(&self.tags, body_width) {
            lines.push(format!("{}{}", indent, style(line).green()));
        }

        if let Some(remark) = &self.remark {
            for line in wrap_label(remark, body_width) {
                lines.push(format!("{}{}", indent, style(line).dim()));
            }
        }

        lines.join("\n")
    }
}

/// Greedy word wrap. Words wider than `width` are split across lines.
pub fn wrap_label(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        for piece in split_long_word(word, width) {
            if current.is_empty() {
                current = piece;
            } else if measure_text_width(&current) + 1 + measure_text_width(&piece) <= width {
                current.push(' ');
                current.push_str(&piece);
            } else {
                lines.push(std::mem::take(&mut current));
                current = piece;
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn split_long_word(word: &str, width: usize) -> Vec<String> {
    if measure_text_width(word) <= width {
        return vec![word.to_string()];
    }

    let mut pieces = Vec::new();
    let mut current = String::new();
    for ch in word.chars() {
        let mut candidate = current.clone();
        candidate.push(ch);
        if !current.is_empty() && measure_text_width(&candidate) > width {
            pieces.push(std::mem::take(&mut current));
            current.push(ch);
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

/// Lay out `[item]` chips left to right, wrapping at `width`
fn flow_chips(items: &[String], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for item in items {
        for chip in wrap_label(&format!("[{}]", item), width) {
            if current.is_empty() {
                current = chip;
            } else if measure_text_width(&current) + 1 + measure_text_width(&chip) <= width {
                current.push(' ');
                current.push_str(&chip);
            } else {
                lines.push(std::mem::take(&mut current));
                current = chip;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use addressbook_domain::{
        Address, Appointment, Email, FinancialPlan, Name, Phone, Remark, Tag,
    };
    use parser::parse_appointment_date;

    fn person() -> Person {
        Person::new(
            Name::parse("Alex Yeoh").unwrap(),
            Phone::parse("87438807").unwrap(),
            Email::parse("alexyeoh@example.com").unwrap(),
            Address::parse("Blk 30 Geylang Street 29, #06-40").unwrap(),
            Name::parse("Mary Yeoh").unwrap(),
            Phone::parse("91234567").unwrap(),
        )
    }

    fn plain(rendered: &str) -> String {
        console::strip_ansi_codes(rendered).to_string()
    }

    // ============== Binding ==============

    #[test]
    fn test_labels_bound_from_person() {
        let person = person();
        let card = PersonCard::new(&person, 1);

        assert_eq!(card.id, "1. ");
        assert_eq!(card.name, "Alex Yeoh");
        assert_eq!(card.phone, "87438807");
        assert_eq!(card.address, "Blk 30 Geylang Street 29, #06-40");
        assert_eq!(card.email, "alexyeoh@example.com");
        assert_eq!(card.next_of_kin_name, "Next-of-kin: Mary Yeoh");
        assert_eq!(card.next_of_kin_phone, "Next-of-kin Phone: 91234567");
        assert_eq!(card.appointment, "Appointment: None");
        assert!(card.remark.is_none());
    }

    #[test]
    fn test_appointment_label() {
        let date_time = parse_appointment_date("01-01-2023 20:00").unwrap();
        let person = person()
            .with_appointment(Some(Appointment::new("Review Insurance", date_time).unwrap()));
        let card = PersonCard::new(&person, 3);

        assert_eq!(card.id, "3. ");
        assert_eq!(card.appointment, "Appointment: Review Insurance, 01 Jan 2023 20:00");
    }

    #[test]
    fn test_plans_and_tags_are_sorted() {
        let person = person()
            .with_financial_plans(["Plan B", "Plan A", "Critical Illness"].map(|p| {
                FinancialPlan::parse(p).unwrap()
            }))
            .with_tags(["neighbour", "friend", "client"].map(|t| Tag::parse(t).unwrap()));
        let card = PersonCard::new(&person, 1);

        assert_eq!(card.financial_plans, ["Critical Illness", "Plan A", "Plan B"]);
        assert_eq!(card.tags, ["client", "friend", "neighbour"]);
    }

    #[test]
    fn test_remark_label_only_when_present() {
        let person = person().with_remark(Remark::new("Prefers email"));
        let card = PersonCard::new(&person, 1);
        assert_eq!(card.remark.as_deref(), Some("Remark: Prefers email"));
    }

    // ============== Rendering ==============

    #[test]
    fn test_render_contains_every_label() {
        let person = person().with_tags([Tag::parse("friends").unwrap()]);
        let rendered = plain(&PersonCard::new(&person, 2).render(60));

        assert!(rendered.starts_with("2. Alex Yeoh"));
        assert!(rendered.contains("Next-of-kin: Mary Yeoh"));
        assert!(rendered.contains("Next-of-kin Phone: 91234567"));
        assert!(rendered.contains("Appointment: None"));
        assert!(rendered.contains("[friends]"));
    }

    #[test]
    fn test_render_respects_width() {
        let person = person()
            .with_financial_plans(
                ["Comprehensive Whole Life Protection Plan", "Plan A", "Plan B"]
                    .map(|p| FinancialPlan::parse(p).unwrap()),
            )
            .with_tags(["supercalifragilisticexpialidocious", "vip"].map(|t| Tag::parse(t).unwrap()))
            .with_remark(Remark::new("Met at the 2023 seminar; interested in retirement planning"));

        for width in [1, 2, 3, 4, 5, 20, 25, 40, 60] {
            let rendered = plain(&PersonCard::new(&person, 10).render(width));
            for line in rendered.lines() {
                assert!(
                    measure_text_width(line) <= width,
                    "line {:?} exceeds {}",
                    line,
                    width
                );
            }
        }
    }

    #[test]
    fn test_narrow_render_drops_indent() {
        let person = person();
        let narrow = plain(&PersonCard::new(&person, 1).render(3));
        assert!(narrow.lines().all(|line| !line.starts_with(' ')));

        let wide = plain(&PersonCard::new(&person, 1).render(4));
        assert!(wide.lines().any(|line| line.starts_with(INDENT)));
    }

    #[test]
    fn test_chips_share_a_line_when_they_fit() {
        let lines = flow_chips(&["a".to_string(), "b".to_string()], 20);
        assert_eq!(lines, ["[a] [b]"]);

        let lines = flow_chips(&["alpha".to_string(), "beta".to_string()], 8);
        assert_eq!(lines, ["[alpha]", "[beta]"]);
    }

    // ============== Wrapping ==============

    #[test]
    fn test_wrap_label() {
        assert_eq!(wrap_label("one two three", 7), ["one two", "three"]);
        assert_eq!(wrap_label("abcdefghij", 4), ["abcd", "efgh", "ij"]);
        assert_eq!(wrap_label("", 10), [""]);
    }
}
