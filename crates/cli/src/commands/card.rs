//! addressbook card command

use addressbook_domain::Person;
use clap::Args;
use shared::ParseError;

use super::Context;
use crate::card::PersonCard;

#[derive(Debug, Args)]
pub struct CardCommand {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub address: String,

    /// Next-of-kin name
    #[arg(long = "nok-name")]
    pub next_of_kin_name: String,

    /// Next-of-kin phone
    #[arg(long = "nok-phone")]
    pub next_of_kin_phone: String,

    /// Appointment description
    #[arg(long = "appt-desc", requires = "appointment_date")]
    pub appointment_description: Option<String>,

    /// Appointment date, dd-MM-yyyy HH:mm
    #[arg(long = "appt-date", requires = "appointment_description")]
    pub appointment_date: Option<String>,

    /// Financial plan (repeatable)
    #[arg(long = "plan")]
    pub financial_plans: Vec<String>,

    /// Tag (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    #[arg(long, default_value = "")]
    pub remark: String,
}

impl CardCommand {
    pub fn run(&self, ctx: &Context) -> anyhow::Result<()> {
        println!("{}", self.render(ctx)?);
        Ok(())
    }

    /// The contact's card, or its JSON form with `--json`
    pub fn render(&self, ctx: &Context) -> anyhow::Result<String> {
        let person = self.to_person()?;

        if ctx.json {
            Ok(serde_json::to_string_pretty(&person)?)
        } else {
            Ok(PersonCard::new(&person, 1).render(ctx.config.card_width))
        }
    }

    /// Parse every field; the first invalid one is reported
    pub fn to_person(&self) -> Result<Person, ParseError> {
        let appointment = match (&self.appointment_description, &self.appointment_date) {
            (Some(description), Some(date)) => Some(parser::parse_appointment(description, date)?),
            _ => None,
        };

        Ok(Person::new(
            parser::parse_name(&self.name)?,
            parser::parse_phone(&self.phone)?,
            parser::parse_email(&self.email)?,
            parser::parse_address(&self.address)?,
            parser::parse_name(&self.next_of_kin_name)?,
            parser::parse_phone(&self.next_of_kin_phone)?,
        )
        .with_appointment(appointment)
        .with_financial_plans(parser::parse_financial_plans(&self.financial_plans)?)
        .with_tags(parser::parse_tags(&self.tags)?)
        .with_remark(parser::parse_remark(&self.remark)))
    }
}
