use graphwalk_core::bail_invalid;
use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::Algorithm;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse algorithm name from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

/// Parse an `A,B` edge from string
pub fn parse_edge(s: &str) -> std::result::Result<(i64, i64), String> {
    edge_from_str(s).map_err(|e| e.to_string())
}

fn edge_from_str(s: &str) -> Result<(i64, i64)> {
    let Some((left, right)) = s.split_once(',') else {
        bail_invalid!("edge", format!("{} (expected FROM,TO)", s));
    };

    let parse_end = |end: &str| -> Result<i64> {
        match end.trim().parse::<i64>() {
            Ok(id) => Ok(id),
            Err(_) => bail_invalid!("edge", format!("{} ('{}' is not an integer)", s, end.trim())),
        }
    };

    Ok((parse_end(left)?, parse_end(right)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edge() {
        assert_eq!(parse_edge("1,2"), Ok((1, 2)));
        assert_eq!(parse_edge(" 10 , -3 "), Ok((10, -3)));
    }

    #[test]
    fn test_parse_edge_rejects_malformed() {
        assert!(parse_edge("12").unwrap_err().contains("expected FROM,TO"));
        assert!(parse_edge("a,2").unwrap_err().contains("'a' is not an integer"));
        assert!(parse_edge("1,2,3").is_err());
    }

    #[test]
    fn test_parse_algorithm_and_format() {
        assert_eq!(parse_algorithm("dfs_recursive"), Ok(Algorithm::DfsRecursive));
        assert!(parse_algorithm("dijkstra").is_err());
        assert_eq!(parse_format("json"), Ok(OutputFormat::Json));
        assert!(parse_format("yaml").is_err());
    }
}
