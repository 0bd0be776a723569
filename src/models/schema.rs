use serde_json::{json, Value};

/// NDT 结果表的字段结构说明（字段路径 -> 类型名）
///
/// 仅用于文档与交互式探索，查询结果不会按此校验。
pub fn get_schema() -> Value {
    json!({
        "id": "string",
        "date": "date",
        "server": {
            "Site": "string",
            "Machine": "string",
            "Geo": {
                "CountryCode": "string",
                "CountryName": "string",
                "City": "string",
                "ContinentCode": "string",
            },
            "Network": {
                "CIDR": "string",
                "ASNumber": "integer",
                "ASName": "string"
            }
        },
        "client": {
            "Geo": {
                "CountryCode": "string",
                "CountryName": "string",
                "City": "string",
                "ContinentCode": "string",
            },
            "Network": {
                "CIDR": "string",
                "ASNumber": "integer",
                "ASName": "string"
            }
        },
        "a": {
            "UUID": "string",
            "CongestionControl": "string",
            "TestTime": "TimeStamp",
            "MeanThroughputMbps": "float",
            "MinRTT": "float",
            "LossRate": "float"
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_describes_the_measurement_fields() {
        let schema = get_schema();
        assert_eq!(schema["a"]["MeanThroughputMbps"], "float");
        assert_eq!(schema["a"]["MinRTT"], "float");
        assert_eq!(schema["client"]["Network"]["ASNumber"], "integer");
        assert_eq!(schema["server"]["Geo"]["CountryCode"], "string");
    }

    #[test]
    fn schema_is_stable_across_calls() {
        assert_eq!(get_schema(), get_schema());
    }
}
