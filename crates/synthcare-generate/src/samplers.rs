use chrono::NaiveDate;
use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, StateName, StreetName, ZipCode};
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::{FirstName, LastName, Name};
use rand::Rng;

use synthcare_core::{CellValue, Sampler};

const CODE_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Per-cell inputs that are not part of the sampler itself.
#[derive(Debug, Clone, Copy)]
pub struct SampleContext {
    pub row_index: u64,
    pub today: NaiveDate,
}

/// Evaluate a sampler to a concrete cell.
pub fn sample<R: Rng>(sampler: &Sampler, ctx: SampleContext, rng: &mut R) -> CellValue {
    match sampler {
        Sampler::RowNumber => CellValue::Int(ctx.row_index as i64 + 1),
        Sampler::IntRange { min, max } => CellValue::Int(rng.random_range(*min..=*max)),
        Sampler::Choice(values) => {
            if values.is_empty() {
                return CellValue::Text("unknown".to_string());
            }
            let idx = rng.random_range(0..values.len());
            CellValue::Text(values[idx].to_string())
        }
        Sampler::DateWithin { days_back } => {
            CellValue::Date(date_within(ctx.today, *days_back, rng))
        }
        Sampler::DateAfterAnchor { anchor_days_back } => {
            // The anchor is re-drawn per cell; it is not any other
            // column's value.
            let anchor = date_within(ctx.today, *anchor_days_back, rng);
            let span = (ctx.today - anchor).num_days().max(0);
            let offset = rng.random_range(0..=span);
            CellValue::Date(anchor + chrono::Duration::days(offset))
        }
        Sampler::FirstName => CellValue::Text(FirstName().fake_with_rng(rng)),
        Sampler::LastName => CellValue::Text(LastName().fake_with_rng(rng)),
        Sampler::FullName => CellValue::Text(Name().fake_with_rng(rng)),
        Sampler::CompanyName => CellValue::Text(CompanyName().fake_with_rng(rng)),
        Sampler::City => CellValue::Text(CityName().fake_with_rng(rng)),
        Sampler::State => CellValue::Text(StateName().fake_with_rng(rng)),
        Sampler::ZipCode => CellValue::Text(ZipCode().fake_with_rng(rng)),
        Sampler::StreetAddress => {
            let number: String = BuildingNumber().fake_with_rng(rng);
            let street: String = StreetName().fake_with_rng(rng);
            CellValue::Text(format!("{number} {street}"))
        }
        Sampler::Code { len } => {
            let mut value = String::with_capacity(*len);
            for _ in 0..*len {
                let idx = rng.random_range(0..CODE_CHARSET.len());
                value.push(char::from(CODE_CHARSET[idx]));
            }
            CellValue::Text(value)
        }
        Sampler::WordList { max } => {
            let count = rng.random_range(0..=*max);
            let words: Vec<String> = (0..count).map(|_| Word().fake_with_rng(rng)).collect();
            CellValue::Text(words.join(", "))
        }
    }
}

fn date_within<R: Rng>(today: NaiveDate, days_back: i64, rng: &mut R) -> NaiveDate {
    let span = days_back.max(0);
    let offset = rng.random_range(0..=span);
    today - chrono::Duration::days(offset)
}
