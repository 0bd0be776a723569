use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// 按日聚合查询支持的聚合函数
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum AggFunc {
    Avg,
    Min,
    Max,
}

impl AggFunc {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggFunc::Avg => "avg",
            AggFunc::Min => "min",
            AggFunc::Max => "max",
        }
    }
}

impl FromStr for AggFunc {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "avg" => Ok(AggFunc::Avg),
            "min" => Ok(AggFunc::Min),
            "max" => Ok(AggFunc::Max),
            other => Err(Error::UnsupportedAggFunc(other.to_string())),
        }
    }
}

/// 按日聚合查询的可选过滤条件集合
///
/// 每个字段要么缺省（不产生任何子句），要么产生恰好一条 ` AND 列=值` 子句。
/// 空字符串视同缺省。子句顺序固定：client ASN / CIDR / 国家码，
/// 然后 server ASN / CIDR / 国家码。
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct QueryFilters {
    pub client_asn: Option<String>,
    pub client_cidr: Option<String>,
    pub client_country: Option<String>,
    pub server_asn: Option<String>,
    pub server_cidr: Option<String>,
    pub server_country: Option<String>,
}

impl QueryFilters {
    /// 拼出 WHERE 子句的追加片段；所有过滤条件缺省时返回空串
    pub(crate) fn where_suffix(&self) -> String {
        let mut out = String::new();

        // ASN 是数值列，不加引号
        append_raw(&mut out, "client.Network.ASNumber", &self.client_asn);
        append_quoted(&mut out, "client.Network.CIDR", &self.client_cidr);
        append_country(&mut out, "client.Geo.CountryCode", &self.client_country);

        append_raw(&mut out, "server.Network.ASNumber", &self.server_asn);
        append_quoted(&mut out, "server.Network.CIDR", &self.server_cidr);
        append_country(&mut out, "server.Geo.CountryCode", &self.server_country);

        out
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn append_raw(out: &mut String, column: &str, value: &Option<String>) {
    if let Some(v) = present(value) {
        out.push_str(&format!(" AND {}={}", column, v));
    }
}

fn append_quoted(out: &mut String, column: &str, value: &Option<String>) {
    if let Some(v) = present(value) {
        out.push_str(&format!(" AND {}='{}'", column, v));
    }
}

// 国家码统一转大写再写入
fn append_country(out: &mut String, column: &str, value: &Option<String>) {
    if let Some(v) = present(value) {
        out.push_str(&format!(" AND {}='{}'", column, v.to_uppercase()));
    }
}
