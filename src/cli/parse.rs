use mazewalk_core::format::OutputFormat;
use mazewalk_core::walk::{DeadEndPolicy, RootSelection};

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse dead-end policy from string
pub fn parse_dead_end_policy(s: &str) -> std::result::Result<DeadEndPolicy, String> {
    s.parse::<DeadEndPolicy>()
}

/// Parse root selection from string
pub fn parse_root_selection(s: &str) -> std::result::Result<RootSelection, String> {
    s.parse::<RootSelection>()
}

/// Parse a maze dimension (at least one cell)
pub fn parse_dimension(s: &str) -> std::result::Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("dimension must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid dimension '{}': {}", s, e)),
    }
}

/// Parse a cell coordinate written as `x,y`
pub fn parse_coord(s: &str) -> std::result::Result<(usize, usize), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("invalid cell '{}' (expected x,y)", s))?;
    let x = x
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid x in '{}': {}", s, e))?;
    let y = y
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid y in '{}': {}", s, e))?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("3,4"), Ok((3, 4)));
        assert_eq!(parse_coord(" 0 , 12 "), Ok((0, 12)));
        assert!(parse_coord("3").is_err());
        assert!(parse_coord("a,1").is_err());
        assert!(parse_coord("1,-1").is_err());
    }

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension("7"), Ok(7));
        assert!(parse_dimension("0").is_err());
        assert!(parse_dimension("wide").is_err());
    }

    #[test]
    fn test_parse_policies() {
        assert_eq!(
            parse_dead_end_policy("backtrack"),
            Ok(DeadEndPolicy::Backtrack)
        );
        assert_eq!(
            parse_root_selection("first-node"),
            Ok(RootSelection::FirstNode)
        );
        assert!(parse_root_selection("middle").is_err());
        assert_eq!(parse_output_format("json"), Ok(OutputFormat::Json));
    }
}
