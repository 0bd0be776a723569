//! 三条固定分析的 SQL 构造逻辑
//!
//! 只负责拼 SQL 文本，不执行。列名与表名必须与仓库中的 NDT 表结构
//! 逐字一致（`client.Network.ASNumber`、`a.MeanThroughputMbps` 等）。

use crate::error::{Error, Result};
use crate::models::query::{AggFunc, QueryFilters};

/// NDT 数据集所在的命名空间
pub const NDT_NAMESPACE: &str = "measurement-lab.ndt";

/// 支持的逻辑表名
pub const SUPPORTED_TABLES: &[&str] = &["ndt5", "ndt7"];

/// 逻辑表名 -> 仓库完整路径
///
/// 支持的表名只有 "ndt5" 和 "ndt7"，其余一律返回错误。
pub fn get_table_path(table_name: &str) -> Result<String> {
    if !SUPPORTED_TABLES.contains(&table_name) {
        return Err(Error::UnsupportedTable(table_name.to_string()));
    }
    Ok(format!("{}.{}", NDT_NAMESPACE, table_name))
}

/// 按日聚合查询：吞吐量 / RTT / 丢包率三项指标各做一次聚合，按日期分组排序
///
/// `aggr_func` 必须是 avg/min/max 之一；两个日期边界必须非空。
/// 校验全部通过后才开始拼接字符串。
pub fn sql_daily_aggregate(
    table_name: &str,
    date_start: &str,
    date_end: &str,
    aggr_func: &str,
    filters: &QueryFilters,
) -> Result<String> {
    let aggr: AggFunc = aggr_func.parse()?;
    require_date_bound("date_start", date_start)?;
    require_date_bound("date_end", date_end)?;
    let table_path = get_table_path(table_name)?;

    let f = aggr.as_str();
    let where_suffix = filters.where_suffix();

    Ok(format!(
        "SELECT {f}(a.MeanThroughputMbps) AS {f}_throughput, \
         {f}(a.MinRTT) AS {f}_rtt, \
         {f}(a.lossrate) AS {f}_lossrate, \
         date\n\
         FROM `{table_path}`\n\
         WHERE a.MeanThroughputMbps > 0 AND a.MinRTT > 0 AND a.lossrate > 0 \
         AND date >= '{date_start}' AND date <= '{date_end}'{where_suffix}\n\
         GROUP BY date ORDER BY date;"
    ))
}

/// 查询日期范围内出现过的全部测量服务器（去重），可按客户端 ASN 过滤
pub fn sql_get_servers(
    table_name: &str,
    date_start: &str,
    date_end: &str,
    client_asn: Option<&str>,
) -> Result<String> {
    require_date_bound("date_start", date_start)?;
    require_date_bound("date_end", date_end)?;
    let table_path = get_table_path(table_name)?;
    let where_suffix = asn_suffix(client_asn);

    Ok(format!(
        "SELECT DISTINCT server.Site, server.Machine, \
         server.Network.ASNumber, server.Network.ASName, server.Network.CIDR, \
         server.Geo.CountryCode, server.Geo.City\n\
         FROM `{table_path}`\n\
         WHERE date >= '{date_start}' AND date <= '{date_end}'{where_suffix}"
    ))
}

/// 查询日期范围内出现过的全部客户端网络（去重）
///
/// 注意：`server_asn` 参数沿用了历史接口名，实际过滤的列是
/// `client.Network.ASNumber`。
pub fn sql_get_clients(
    table_name: &str,
    date_start: &str,
    date_end: &str,
    server_asn: Option<&str>,
) -> Result<String> {
    require_date_bound("date_start", date_start)?;
    require_date_bound("date_end", date_end)?;
    let table_path = get_table_path(table_name)?;
    let where_suffix = asn_suffix(server_asn);

    Ok(format!(
        "SELECT DISTINCT client.Network.ASNumber, client.Network.ASName, \
         client.Geo.CountryCode\n\
         FROM `{table_path}`\n\
         WHERE date >= '{date_start}' AND date <= '{date_end}'{where_suffix}"
    ))
}

fn require_date_bound(name: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::MissingDateBound(name));
    }
    Ok(())
}

// 去重查询只有客户端 ASN 这一个可选过滤条件，空字符串视同缺省
fn asn_suffix(asn: Option<&str>) -> String {
    match asn {
        Some(v) if !v.is_empty() => format!(" AND client.Network.ASNumber={}", v),
        _ => String::new(),
    }
}
