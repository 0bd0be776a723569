use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use serde_json::{json, Map, Value};
use sqlx::postgres::PgRow;
use sqlx::{Column, Row, TypeInfo};

/// 查询结果的内存物化形式：列名序列 + 每行一个 JSON 对象
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<Value>,
}

impl ResultSet {
    pub fn from_pg_rows(rows: &[PgRow]) -> Self {
        let columns = rows
            .first()
            .map(|row| row.columns().iter().map(|c| c.name().to_string()).collect())
            .unwrap_or_default();
        let rows = rows.iter().map(row_to_json).collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Value] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// 按数据库原生类型名逐列解码；NDT 结果里主要是 DATE、FLOAT8 和 TEXT
fn row_to_json(row: &PgRow) -> Value {
    let mut map = Map::new();
    for col in row.columns() {
        let name = col.name();
        map.insert(name.to_string(), decode_column(row, name, col.type_info().name()));
    }
    Value::Object(map)
}

fn decode_column(row: &PgRow, name: &str, type_name: &str) -> Value {
    match type_name {
        "INT2" | "INT4" => json!(row.try_get::<Option<i32>, _>(name).unwrap_or(None)),
        "INT8" => json!(row.try_get::<Option<i64>, _>(name).unwrap_or(None)),
        "FLOAT4" | "FLOAT8" => json!(row.try_get::<Option<f64>, _>(name).unwrap_or(None)),
        "NUMERIC" => {
            let v: Option<rust_decimal::Decimal> = row.try_get(name).unwrap_or(None);
            json!(v.and_then(|d| d.to_f64()))
        }
        "BOOL" => json!(row.try_get::<Option<bool>, _>(name).unwrap_or(None)),
        "DATE" => {
            let v: Option<NaiveDate> = row.try_get(name).unwrap_or(None);
            json!(v.map(|d| d.to_string()))
        }
        "TIMESTAMP" | "TIMESTAMPTZ" => {
            let v: Option<NaiveDateTime> = row.try_get(name).unwrap_or(None);
            json!(v.map(|dt| dt.to_string()))
        }
        "JSON" | "JSONB" => row
            .try_get::<Option<Value>, _>(name)
            .unwrap_or(None)
            .unwrap_or(Value::Null),
        // TEXT/VARCHAR 及未知类型统一按字符串取
        _ => json!(row.try_get::<Option<String>, _>(name).unwrap_or(None)),
    }
}
