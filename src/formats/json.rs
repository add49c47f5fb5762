use crate::lattice::Basis;
use crate::lll_error::{LllError, LllErrorKind};
use rug::Integer;
use serde_json::Value;

fn input_error(message: &str) -> Box<LllError> {
    LllError::boxed("Invalid basis data", message, LllErrorKind::Input)
}

/// Parses `[["11","3"],["2","11"]]`. Entries may also be bare JSON integers of any size.
pub(crate) fn parse_basis(data: &str) -> Result<Basis, Box<LllError>> {
    let value: Value = serde_json::from_str(data.trim()).map_err(|e| {
        input_error(&format!(
            "expected a JSON array of rows like [[\"1\",\"2\"],[\"3\",\"4\"]]: {e}"
        ))
    })?;

    let Value::Array(rows) = value else {
        return Err(input_error("top-level value must be an array of rows"));
    };

    let mut basis = Vec::with_capacity(rows.len());
    for (r, row) in rows.iter().enumerate() {
        let Value::Array(entries) = row else {
            return Err(input_error(&format!("row {} is not an array", r + 1)));
        };
        let parsed = entries
            .iter()
            .enumerate()
            .map(|(c, entry)| parse_entry(entry, r, c))
            .collect::<Result<Vec<Integer>, _>>()?;
        basis.push(parsed);
    }

    Ok(Basis::new(basis))
}

fn parse_entry(entry: &Value, row: usize, column: usize) -> Result<Integer, Box<LllError>> {
    // arbitrary_precision keeps the literal digits of numbers
    let text = match entry {
        Value::String(s) => s.trim().to_owned(),
        Value::Number(n) => n.to_string(),
        other => {
            return Err(input_error(&format!(
                "row {}, column {}: expected an integer, found {other}",
                row + 1,
                column + 1
            )));
        }
    };
    text.parse::<Integer>().map_err(|e| {
        input_error(&format!(
            "row {}, column {}: '{text}' is not an integer ({e})",
            row + 1,
            column + 1
        ))
    })
}

pub(crate) fn format_basis(basis: &Basis) -> String {
    let rows: Vec<String> = basis
        .rows()
        .iter()
        .map(|row| {
            let entries: Vec<String> = row.iter().map(|v| format!("\"{v}\"")).collect();
            format!("[{}]", entries.join(","))
        })
        .collect();
    format!("[{}]", rows.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quoted_rows() {
        let basis = parse_basis(r#"[["11","3","4"],["2","11","5"]]"#).unwrap();
        assert_eq!(basis, Basis::from_i64_rows(&[[11, 3, 4], [2, 11, 5]]));
    }

    #[test]
    fn test_parse_bare_and_huge_numbers() {
        let huge = "123456789012345678901234567890123456789";
        let basis = parse_basis(&format!("[[{huge}, -2], [\" 7 \", 0]]")).unwrap();
        assert_eq!(basis.row(0)[0].to_string(), huge);
        assert_eq!(basis.row(0)[1], -2);
        assert_eq!(basis.row(1)[0], 7);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_basis("[]").unwrap().is_empty());
        assert!(parse_basis("  [] \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_errors_name_position() {
        let err = parse_basis(r#"[["1","2"],["3","x"]]"#).unwrap_err();
        assert_eq!(err.kind(), LllErrorKind::Input);
        assert!(err.message().contains("row 2, column 2"));

        let err = parse_basis("[[1.5]]").unwrap_err();
        assert!(err.message().contains("row 1, column 1"));

        let err = parse_basis("[[1],2]").unwrap_err();
        assert!(err.message().contains("row 2 is not an array"));

        assert!(parse_basis("{\"a\":1}").is_err());
        assert!(parse_basis("[[1,2]").is_err());
    }

    #[test]
    fn test_format() {
        let basis = Basis::from_i64_rows(&[[0, 1, 0], [1, 0, 1], [-1, 0, 2]]);
        assert_eq!(
            format_basis(&basis),
            r#"[["0","1","0"],["1","0","1"],["-1","0","2"]]"#
        );
        assert_eq!(format_basis(&Basis::default()), "[]");
    }
}
