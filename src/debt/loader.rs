//! Load debt portfolios from CSV

use super::Debt;
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row matching the portfolio file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Principal")]
    principal: f64,
    #[serde(rename = "AnnualRate")]
    annual_rate: f64,
}

impl CsvRow {
    fn to_debt(self) -> Result<Debt, Box<dyn Error>> {
        if self.principal < 0.0 {
            return Err(format!("Negative principal: {}", self.principal).into());
        }
        if self.annual_rate < 0.0 {
            return Err(format!("Negative annual rate: {}", self.annual_rate).into());
        }
        Ok(Debt::new(self.principal, self.annual_rate))
    }
}

/// Load all debts from a CSV file with `Principal,AnnualRate` columns
pub fn load_debts<P: AsRef<Path>>(path: P) -> Result<Vec<Debt>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut debts = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        debts.push(row.to_debt()?);
    }

    Ok(debts)
}

/// Load debts from any reader (e.g., string buffer, network stream)
pub fn load_debts_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Debt>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut debts = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        debts.push(row.to_debt()?);
    }

    Ok(debts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_reader() {
        let csv = "Principal,AnnualRate\n5000,0.18\n8000,0.06\n3000,0.04\n";
        let debts = load_debts_from_reader(csv.as_bytes()).expect("Failed to parse debts");

        assert_eq!(debts.len(), 3);
        assert_eq!(debts[0].principal(), 5000.0);
        assert_eq!(debts[0].annual_rate(), 0.18);
        assert_eq!(debts[2].principal(), 3000.0);
    }

    #[test]
    fn test_negative_principal_rejected() {
        let csv = "Principal,AnnualRate\n-100,0.10\n";
        let result = load_debts_from_reader(csv.as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_rate_rejected() {
        let csv = "Principal,AnnualRate\n100,-0.10\n";
        let result = load_debts_from_reader(csv.as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_row_rejected() {
        let csv = "Principal,AnnualRate\nabc,0.10\n";
        let result = load_debts_from_reader(csv.as_bytes());
        assert!(result.is_err());
    }
}
