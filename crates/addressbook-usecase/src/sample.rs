//! Sample contacts for a fresh session

use addressbook_domain::{
    Address, Appointment, Email, FinancialPlan, Name, Person, Phone, Tag, YearMonth,
};
use chrono::NaiveTime;
use shared::{AddressBookError, Result};

struct SampleContact {
    name: &'static str,
    phone: &'static str,
    email: &'static str,
    address: &'static str,
    next_of_kin_name: &'static str,
    next_of_kin_phone: &'static str,
    appointment: Option<(&'static str, (i32, u32, u32), (u32, u32))>,
    financial_plans: &'static [&'static str],
    tags: &'static [&'static str],
}

const SAMPLE_CONTACTS: &[SampleContact] = &[
    SampleContact {
        name: "Alex Yeoh",
        phone: "87438807",
        email: "alexyeoh@example.com",
        address: "Blk 30 Geylang Street 29, #06-40",
        next_of_kin_name: "Mary Yeoh",
        next_of_kin_phone: "91234567",
        appointment: Some(("Review Insurance", (2023, 12, 1), (14, 30))),
        financial_plans: &["Sample Plan 1"],
        tags: &["friends"],
    },
    SampleContact {
        name: "Bernice Yu",
        phone: "99272758",
        email: "berniceyu@example.com",
        address: "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        next_of_kin_name: "Jason Yu",
        next_of_kin_phone: "92345678",
        appointment: None,
        financial_plans: &["Sample Plan 1", "Sample Plan 2"],
        tags: &["colleagues", "friends"],
    },
    SampleContact {
        name: "Charlotte Oliveiro",
        phone: "93210283",
        email: "charlotte@example.com",
        address: "Blk 11 Ang Mo Kio Street 74, #11-04",
        next_of_kin_name: "Lucas Oliveiro",
        next_of_kin_phone: "93456789",
        appointment: Some(("Plan Renewal", (2024, 2, 29), (10, 0))),
        financial_plans: &["Sample Plan 3"],
        tags: &["neighbours"],
    },
    SampleContact {
        name: "David Li",
        phone: "91031282",
        email: "lidavid@example.com",
        address: "Blk 436 Serangoon Gardens Street 26, #16-43",
        next_of_kin_name: "Grace Li",
        next_of_kin_phone: "94567890",
        appointment: None,
        financial_plans: &[],
        tags: &["family"],
    },
    SampleContact {
        name: "Irfan Ibrahim",
        phone: "92492021",
        email: "irfan@example.com",
        address: "Blk 47 Tampines Street 20, #17-35",
        next_of_kin_name: "Siti Ibrahim",
        next_of_kin_phone: "95678901",
        appointment: None,
        financial_plans: &["Sample Plan 2"],
        tags: &["classmates"],
    },
    SampleContact {
        name: "Roy Balakrishnan",
        phone: "92624417",
        email: "royb@example.com",
        address: "Blk 45 Aljunied Street 85, #11-31",
        next_of_kin_name: "Priya Balakrishnan",
        next_of_kin_phone: "96789012",
        appointment: None,
        financial_plans: &[],
        tags: &["colleagues"],
    },
];

/// The typical contacts shown when no other data is available
pub fn sample_persons() -> Result<Vec<Person>> {
    SAMPLE_CONTACTS.iter().map(build).collect()
}

fn build(contact: &SampleContact) -> Result<Person> {
    let appointment = match contact.appointment {
        Some((description, (year, month, day), (hour, minute))) => {
            let date = YearMonth::new(year, month).and_then(|ym| ym.at_day(day));
            let time = NaiveTime::from_hms_opt(hour, minute, 0);
            let date_time = date.zip(time).map(|(d, t)| d.and_time(t)).ok_or_else(|| {
                AddressBookError::Other(format!("invalid sample appointment for {}", contact.name))
            })?;
            Some(Appointment::new(description, date_time)?)
        }
        None => None,
    };

    let financial_plans = contact
        .financial_plans
        .iter()
        .map(|p| FinancialPlan::parse(p))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let tags = contact
        .tags
        .iter()
        .map(|t| Tag::parse(t))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(Person::new(
        Name::parse(contact.name)?,
        Phone::parse(contact.phone)?,
        Email::parse(contact.email)?,
        Address::parse(contact.address)?,
        Name::parse(contact.next_of_kin_name)?,
        Phone::parse(contact.next_of_kin_phone)?,
    )
    .with_appointment(appointment)
    .with_financial_plans(financial_plans)
    .with_tags(tags))
}
