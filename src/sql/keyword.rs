//! SQL vocabulary used by the highlighter and the keyword completer.
//!
//! The tokenizer consults the per-category tables in a fixed priority order
//! (see `tokenizer.rs`); a word listed in two tables is classified by the one
//! consulted first. Entries containing a space are phrases: each space matches
//! any non-empty run of whitespace.
//!
//! `SQL_KEYWORDS` is the completion list. Its order is the order suggestions
//! are offered in, so keep the most common words near the top. Multi-word
//! entries such as `NULLS FIRST` are single completion strings.

pub const NULL_LITERAL: &[&str] = &["NULL"];

pub const BOOLEAN_LITERALS: &[&str] = &["TRUE", "FALSE"];

pub const DDL_KEYWORDS: &[&str] = &[
    "CREATE", "ALTER", "DROP", "TRUNCATE", "RENAME", "GRANT", "REVOKE", "UNDROP",
];

pub const DML_KEYWORDS: &[&str] = &["INSERT", "UPDATE", "DELETE", "MERGE", "UPSERT", "COPY"];

pub const TRANSACTION_KEYWORDS: &[&str] = &[
    "BEGIN",
    "COMMIT",
    "ROLLBACK",
    "SAVEPOINT",
    "RELEASE",
    "START TRANSACTION",
    "TRANSACTION",
];

pub const PRIMARY_KEYWORDS: &[&str] = &[
    "SELECT",
    "FROM",
    "WHERE",
    "JOIN",
    "INNER",
    "LEFT",
    "RIGHT",
    "FULL",
    "OUTER",
    "CROSS",
    "ON",
    "USING",
    "GROUP BY",
    "ORDER BY",
    "PARTITION BY",
    "HAVING",
    "QUALIFY",
    "UNION",
    "INTERSECT",
    "EXCEPT",
    "MINUS",
    "WITH",
    "INTO",
    "VALUES",
    "SET",
    "LATERAL",
    "WINDOW",
];

pub const CLAUSE_KEYWORDS: &[&str] = &[
    "DISTINCT",
    "LIMIT",
    "OFFSET",
    "FETCH",
    "TOP",
    "CASE",
    "WHEN",
    "THEN",
    "ELSE",
    "END",
    "AS",
    "AND",
    "OR",
    "NOT",
    "IN",
    "IS",
    "LIKE",
    "ILIKE",
    "BETWEEN",
    "EXISTS",
    "ALL",
    "ANY",
    "SOME",
    "ASC",
    "DESC",
    "NULLS",
    "FIRST",
    "LAST",
    "OVER",
    "ROWS",
    "RANGE",
    "UNBOUNDED",
    "PRECEDING",
    "FOLLOWING",
    "CURRENT",
    "ROW",
    "RECURSIVE",
    "IF",
    "TABLE",
    "VIEW",
    "INDEX",
    "SCHEMA",
    "DATABASE",
    "PRIMARY",
    "FOREIGN",
    "KEY",
    "REFERENCES",
    "CONSTRAINT",
    "UNIQUE",
    "DEFAULT",
    "BY",
];

/// Recognized as function names only when immediately followed by `(`.
pub const FUNCTION_NAMES: &[&str] = &[
    "COUNT",
    "SUM",
    "AVG",
    "MIN",
    "MAX",
    "MEDIAN",
    "COALESCE",
    "NULLIF",
    "NVL",
    "IFF",
    "IFNULL",
    "CAST",
    "TRY_CAST",
    "CONCAT",
    "SUBSTRING",
    "SUBSTR",
    "UPPER",
    "LOWER",
    "TRIM",
    "LTRIM",
    "RTRIM",
    "LENGTH",
    "REPLACE",
    "SPLIT_PART",
    "REGEXP_LIKE",
    "REGEXP_REPLACE",
    "ROUND",
    "FLOOR",
    "CEIL",
    "ABS",
    "MOD",
    "POWER",
    "SQRT",
    "GREATEST",
    "LEAST",
    "NOW",
    "CURRENT_DATE",
    "CURRENT_TIMESTAMP",
    "DATE_TRUNC",
    "DATE_PART",
    "DATEADD",
    "DATEDIFF",
    "EXTRACT",
    "TO_DATE",
    "TO_CHAR",
    "TO_TIMESTAMP",
    "TO_NUMBER",
    "ROW_NUMBER",
    "RANK",
    "DENSE_RANK",
    "NTILE",
    "LAG",
    "LEAD",
    "FIRST_VALUE",
    "LAST_VALUE",
    "LISTAGG",
    "ARRAY_AGG",
    "STRING_AGG",
    "APPROX_COUNT_DISTINCT",
    "OBJECT_CONSTRUCT",
    "PARSE_JSON",
    "FLATTEN",
];

pub const DATA_TYPES: &[&str] = &[
    "INT",
    "INTEGER",
    "BIGINT",
    "SMALLINT",
    "TINYINT",
    "BYTEINT",
    "DECIMAL",
    "NUMERIC",
    "NUMBER",
    "FLOAT",
    "FLOAT4",
    "FLOAT8",
    "DOUBLE PRECISION",
    "DOUBLE",
    "REAL",
    "BOOLEAN",
    "BOOL",
    "CHARACTER",
    "CHAR",
    "VARCHAR",
    "STRING",
    "TEXT",
    "BINARY",
    "VARBINARY",
    "DATE",
    "DATETIME",
    "TIME",
    "TIMESTAMP",
    "TIMESTAMP_LTZ",
    "TIMESTAMP_NTZ",
    "TIMESTAMP_TZ",
    "INTERVAL",
    "VARIANT",
    "OBJECT",
    "ARRAY",
    "JSON",
    "JSONB",
    "UUID",
    "GEOGRAPHY",
];

/// Longest first within each table so `<=` wins over `<`.
pub const MULTI_CHAR_OPERATORS: &[&str] = &["<=", ">=", "<>", "!=", "==", "||", "::", "=>", "->"];

pub const SINGLE_CHAR_OPERATORS: &[&str] =
    &["=", "<", ">", "+", "-", "/", "%", "!", "|", "&", "^", "~"];

pub const PUNCTUATION: &[&str] = &["(", ")", ",", ";", ".", "*", "[", "]", "{", "}", ":"];

/// Completion list offered in keyword context, in suggestion order.
pub const SQL_KEYWORDS: &[&str] = &[
    "SELECT",
    "FROM",
    "WHERE",
    "AND",
    "OR",
    "NOT",
    "JOIN",
    "LEFT JOIN",
    "INNER JOIN",
    "RIGHT JOIN",
    "FULL OUTER JOIN",
    "CROSS JOIN",
    "ON",
    "AS",
    "GROUP BY",
    "ORDER BY",
    "PARTITION BY",
    "HAVING",
    "QUALIFY",
    "LIMIT",
    "OFFSET",
    "DISTINCT",
    "CASE",
    "WHEN",
    "THEN",
    "ELSE",
    "END",
    "IN",
    "IS",
    "IS NULL",
    "IS NOT NULL",
    "LIKE",
    "ILIKE",
    "BETWEEN",
    "EXISTS",
    "NULL",
    "TRUE",
    "FALSE",
    "ASC",
    "DESC",
    "NULLS FIRST",
    "NULLS LAST",
    "UNION",
    "UNION ALL",
    "INTERSECT",
    "EXCEPT",
    "WITH",
    "OVER",
    "ROWS BETWEEN",
    "UNBOUNDED PRECEDING",
    "CURRENT ROW",
    "INSERT INTO",
    "VALUES",
    "UPDATE",
    "SET",
    "DELETE",
    "MERGE",
    "CREATE",
    "CREATE TABLE",
    "CREATE VIEW",
    "CREATE OR REPLACE",
    "ALTER",
    "ALTER TABLE",
    "DROP",
    "DROP TABLE",
    "TRUNCATE",
    "BEGIN",
    "COMMIT",
    "ROLLBACK",
    "COUNT",
    "SUM",
    "AVG",
    "MIN",
    "MAX",
    "MEDIAN",
    "COALESCE",
    "NULLIF",
    "NVL",
    "IFF",
    "IFNULL",
    "CAST",
    "TRY_CAST",
    "CONCAT",
    "SUBSTRING",
    "UPPER",
    "LOWER",
    "TRIM",
    "LENGTH",
    "REPLACE",
    "SPLIT_PART",
    "REGEXP_LIKE",
    "REGEXP_REPLACE",
    "ROUND",
    "FLOOR",
    "CEIL",
    "ABS",
    "GREATEST",
    "LEAST",
    "CURRENT_DATE",
    "CURRENT_TIMESTAMP",
    "DATE_TRUNC",
    "DATE_PART",
    "DATEADD",
    "DATEDIFF",
    "EXTRACT",
    "TO_DATE",
    "TO_CHAR",
    "TO_TIMESTAMP",
    "ROW_NUMBER",
    "RANK",
    "DENSE_RANK",
    "LAG",
    "LEAD",
    "FIRST_VALUE",
    "LAST_VALUE",
    "LISTAGG",
    "ARRAY_AGG",
    "APPROX_COUNT_DISTINCT",
    "PARSE_JSON",
    "FLATTEN",
    "INT",
    "INTEGER",
    "BIGINT",
    "DECIMAL",
    "NUMBER",
    "FLOAT",
    "BOOLEAN",
    "VARCHAR",
    "STRING",
    "DATE",
    "TIMESTAMP",
    "TIMESTAMP_NTZ",
    "VARIANT",
];
