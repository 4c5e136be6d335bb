// src/db/query.rs
//
// Turns a validated `QueryParameterSet` into parameterized SQL.
//
// Clause order is fixed: price_min, price_max, ids, near, ORDER BY, LIMIT,
// OFFSET. Placeholders are `?N`, numbered from 1 across the whole statement,
// so reordering clauses changes which value binds where.

use std::fmt::Write as _;
use std::rc::Rc;

use rusqlite::types::{ToSqlOutput, Value};
use rusqlite::ToSql;

use crate::domain::{QueryParameterSet, SortColumn};

/// Columns selected for every rental read. Row mapping relies on this order.
pub const RENTAL_SELECT: &str = r#"SELECT
    r.id,                 -- 0
    r.user_id,            -- 1
    r.name,               -- 2
    r.type,               -- 3
    r.description,        -- 4
    r.sleeps,             -- 5
    r.price_per_day,      -- 6
    r.home_city,          -- 7
    r.home_state,         -- 8
    r.home_zip,           -- 9
    r.home_country,       -- 10
    r.vehicle_make,       -- 11
    r.vehicle_model,      -- 12
    r.vehicle_year,       -- 13
    r.vehicle_length,     -- 14
    r.created,            -- 15
    r.updated,            -- 16
    r.lat,                -- 17
    r.lng,                -- 18
    r.primary_image_url,  -- 19
    u.id,                 -- 20
    u.first_name,         -- 21
    u.last_name           -- 22
FROM rentals r
JOIN users u ON r.user_id = u.id"#;

/// A value bound to a `?N` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlArg {
    Int(i64),
    Real(f64),
    /// Bound as a `rarray()` table for set membership.
    IntList(Vec<i64>),
}

impl ToSql for SqlArg {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            SqlArg::Int(v) => ToSqlOutput::from(*v),
            SqlArg::Real(v) => ToSqlOutput::from(*v),
            SqlArg::IntList(ids) => {
                ToSqlOutput::Array(Rc::new(ids.iter().copied().map(Value::from).collect()))
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CmpOp {
    Gt,
    Lt,
}

impl CmpOp {
    fn as_sql(self) -> &'static str {
        match self {
            CmpOp::Gt => ">",
            CmpOp::Lt => "<",
        }
    }
}

/// One `AND ...` filter of the WHERE clause.
#[derive(Debug, Clone, PartialEq)]
enum Predicate {
    Compare {
        column: &'static str,
        op: CmpOp,
        value: i64,
    },
    InList {
        column: &'static str,
        values: Vec<i64>,
    },
    Between {
        column: &'static str,
        low: f64,
        high: f64,
    },
}

/// SQL text plus its positional arguments, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalQuery {
    pub sql: String,
    pub args: Vec<SqlArg>,
}

#[derive(Debug, Default)]
pub struct RentalQueryBuilder {
    predicates: Vec<Predicate>,
    order_by: Option<SortColumn>,
    limit: Option<i64>,
    offset: Option<i64>,
}

impl RentalQueryBuilder {
    /// Lay out the parameter set as ordered clause descriptors.
    pub fn from_params(params: &QueryParameterSet) -> Self {
        let mut predicates = Vec::new();

        if let Some(min) = non_zero(params.price_min) {
            predicates.push(Predicate::Compare {
                column: "price_per_day",
                op: CmpOp::Gt,
                value: min,
            });
        }

        if let Some(max) = non_zero(params.price_max) {
            predicates.push(Predicate::Compare {
                column: "price_per_day",
                op: CmpOp::Lt,
                value: max,
            });
        }

        if let Some(ids) = params.ids.as_ref().filter(|ids| !ids.is_empty()) {
            predicates.push(Predicate::InList {
                column: "id",
                values: ids.clone(),
            });
        }

        if let Some(near) = params.near {
            predicates.push(Predicate::Between {
                column: "lat",
                low: near.min_lat,
                high: near.max_lat,
            });
            predicates.push(Predicate::Between {
                column: "lng",
                low: near.min_lng,
                high: near.max_lng,
            });
        }

        Self {
            predicates,
            order_by: params.sort,
            limit: non_zero(params.limit),
            offset: non_zero(params.offset),
        }
    }

    pub fn build(self) -> RentalQuery {
        let mut sql = String::from(RENTAL_SELECT);
        let mut args = Vec::new();

        sql.push_str("\nWHERE 1 = 1");

        for predicate in self.predicates {
            match predicate {
                Predicate::Compare { column, op, value } => {
                    args.push(SqlArg::Int(value));
                    let _ = write!(sql, " AND r.{column} {} ?{}", op.as_sql(), args.len());
                }
                Predicate::InList { column, values } => {
                    args.push(SqlArg::IntList(values));
                    let _ = write!(sql, " AND r.{column} IN rarray(?{})", args.len());
                }
                Predicate::Between { column, low, high } => {
                    args.push(SqlArg::Real(low));
                    args.push(SqlArg::Real(high));
                    let _ = write!(
                        sql,
                        " AND r.{column} BETWEEN ?{} AND ?{}",
                        args.len() - 1,
                        args.len()
                    );
                }
            }
        }

        // Allow-listed column name, never caller input.
        if let Some(sort) = self.order_by {
            let _ = write!(sql, " ORDER BY r.{}", sort.column());
        }

        if let Some(limit) = self.limit {
            args.push(SqlArg::Int(limit));
            let _ = write!(sql, " LIMIT ?{}", args.len());
        }

        if let Some(offset) = self.offset {
            // SQLite only accepts OFFSET as part of a LIMIT clause.
            if self.limit.is_none() {
                sql.push_str(" LIMIT -1");
            }
            args.push(SqlArg::Int(offset));
            let _ = write!(sql, " OFFSET ?{}", args.len());
        }

        RentalQuery { sql, args }
    }
}

/// Build the listing query for `params`.
pub fn build_rental_query(params: &QueryParameterSet) -> RentalQuery {
    RentalQueryBuilder::from_params(params).build()
}

// Zero means "not supplied" for price bounds, limit and offset.
fn non_zero(value: Option<i64>) -> Option<i64> {
    value.filter(|v| *v != 0)
}
