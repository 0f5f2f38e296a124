use chrono::NaiveDate;

/// A single generated cell.
///
/// `Null` is the absent-value marker: it serializes to an empty CSV field
/// and is distinct from a valid empty string.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Int(i64),
    Text(String),
    Date(NaiveDate),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn to_csv(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Int(value) => value.to_string(),
            CellValue::Text(value) => value.clone(),
            CellValue::Date(value) => value.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CellValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(value) => Some(*value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_serializes_to_empty_field() {
        assert_eq!(CellValue::Null.to_csv(), "");
        assert!(CellValue::Null.is_null());
        assert!(!CellValue::Text(String::new()).is_null());
    }

    #[test]
    fn dates_use_iso_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(CellValue::Date(date).to_csv(), "2024-03-09");
    }
}
