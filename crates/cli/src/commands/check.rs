//! addressbook check command

use clap::{Args, ValueEnum};
use shared::ParseError;

use super::Context;

/// Fields that can be validated on their own
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Field {
    Name,
    Phone,
    Email,
    Address,
    Tag,
    Plan,
    Remark,
    Index,
    /// dd-MM-yyyy
    Date,
    /// dd-MM-yyyy HH:mm
    Datetime,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Field to validate
    #[arg(value_enum)]
    pub field: Field,

    /// Raw input, exactly as a user would type it
    pub value: String,
}

impl CheckCommand {
    pub fn run(&self, ctx: &Context) -> anyhow::Result<()> {
        let result = normalise(self.field, &self.value);

        if ctx.json {
            println!("{}", serde_json::to_string_pretty(&json_report(&result))?);
        } else if let Ok(value) = &result {
            println!("✓ {}", value);
        }

        result.map(|_| ()).map_err(anyhow::Error::from)
    }
}

fn json_report(result: &Result<String, ParseError>) -> serde_json::Value {
    match result {
        Ok(value) => serde_json::json!({ "valid": true, "value": value }),
        Err(err) => serde_json::json!({ "valid": false, "error": err.message }),
    }
}

/// Parse `value` as `field` and return the stored form of the value
pub fn normalise(field: Field, value: &str) -> Result<String, ParseError> {
    Ok(match field {
        Field::Name => parser::parse_name(value)?.to_string(),
        Field::Phone => parser::parse_phone(value)?.to_string(),
        Field::Email => parser::parse_email(value)?.to_string(),
        Field::Address => parser::parse_address(value)?.to_string(),
        Field::Tag => parser::parse_tag(value)?.tag_name().to_string(),
        Field::Plan => parser::parse_financial_plan(value)?
            .financial_plan_name()
            .to_string(),
        Field::Remark => parser::parse_remark(value).to_string(),
        Field::Index => parser::parse_index(value)?.to_string(),
        Field::Date => parser::parse_date(value)?.format("%d-%m-%Y").to_string(),
        Field::Datetime => parser::parse_appointment_date(value)?
            .format(addressbook_domain::model::appointment::INPUT_DATE_TIME_FORMAT)
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalise_trims() {
        assert_eq!(normalise(Field::Name, "  Rachel Walker ").unwrap(), "Rachel Walker");
        assert_eq!(normalise(Field::Index, " 3 ").unwrap(), "3");
        assert_eq!(normalise(Field::Remark, " hi ").unwrap(), "hi");
    }

    #[test]
    fn test_normalise_dates() {
        assert_eq!(normalise(Field::Date, "29-02-2024").unwrap(), "29-02-2024");
        assert_eq!(
            normalise(Field::Datetime, "01-01-2023 20:00").unwrap(),
            "01-01-2023 20:00"
        );
        assert!(normalise(Field::Date, "29-02-2022").is_err());
    }

    #[test]
    fn test_normalise_reports_constraint() {
        let err = normalise(Field::Tag, "#friend").unwrap_err();
        assert_eq!(err.message, addressbook_domain::Tag::MESSAGE_CONSTRAINTS);
        assert!(normalise(Field::Plan, "Plan !!").is_err());
        assert!(normalise(Field::Email, "example.com").is_err());
        assert!(normalise(Field::Phone, "+651234").is_err());
        assert!(normalise(Field::Address, " ").is_err());
    }

    #[test]
    fn test_json_report_shape() {
        let ok = json_report(&normalise(Field::Email, " rachel@example.com "));
        assert_eq!(
            ok,
            serde_json::json!({ "valid": true, "value": "rachel@example.com" })
        );

        let err = json_report(&normalise(Field::Tag, "#friend"));
        assert_eq!(err["valid"], false);
        assert_eq!(err["error"], addressbook_domain::Tag::MESSAGE_CONSTRAINTS);
        assert!(err.get("value").is_none());
    }

    #[test]
    fn test_run_json_mode() {
        let ctx = Context {
            json: true,
            ..Default::default()
        };
        let valid = CheckCommand {
            field: Field::Date,
            value: "29-02-2024".to_string(),
        };
        assert!(valid.run(&ctx).is_ok());

        let invalid = CheckCommand {
            field: Field::Date,
            value: "29-02-2022".to_string(),
        };
        assert!(invalid.run(&ctx).is_err());
    }

    #[test]
    fn test_run_fails_on_invalid_value() {
        let cmd = CheckCommand {
            field: Field::Phone,
            value: "12".to_string(),
        };
        assert!(cmd.run(&Context::default()).is_err());
    }
}
