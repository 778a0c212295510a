#![allow(dead_code)]

//! In-memory stand-in for a PostgreSQL server.
//!
//! `FakeDatabase` holds the sequences; each `FakeSession` is one database
//! session with its own `currval` state. Failures are reported the way the
//! postgres driver reports them: `sqlx::Error::Database` carrying a SQLSTATE
//! code.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use oxide_sequence::connection::Connector;
use sqlx::error::{DatabaseError, ErrorKind};

#[derive(Debug)]
pub struct FakeDbError {
    code: &'static str,
    message: String,
}

impl fmt::Display for FakeDbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FakeDbError {}

impl DatabaseError for FakeDbError {
    fn message(&self) -> &str {
        &self.message
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.code))
    }

    fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

pub fn db_error(code: &'static str, message: impl Into<String>) -> sqlx::Error {
    sqlx::Error::Database(Box::new(FakeDbError {
        code,
        message: message.into(),
    }))
}

#[derive(Debug, Clone)]
struct FakeSequence {
    increment: i64,
    min: i64,
    max: i64,
    last: i64,
    called: bool,
    cycle: bool,
}

impl FakeSequence {
    fn advance(&mut self, name: &str) -> Result<i64, sqlx::Error> {
        if !self.called {
            self.called = true;
            return Ok(self.last);
        }

        let next = self.last.checked_add(self.increment);
        let value = match next {
            Some(v) if v >= self.min && v <= self.max => v,
            _ if !self.cycle => {
                let which = if self.increment > 0 { "maximum" } else { "minimum" };
                return Err(db_error(
                    "2200H",
                    format!("nextval: reached {which} value of sequence \"{name}\""),
                ));
            }
            _ if self.increment > 0 => self.min,
            _ => self.max,
        };
        self.last = value;
        Ok(value)
    }
}

/// Sequences shared by every session.
#[derive(Debug, Clone, Default)]
pub struct FakeDatabase {
    sequences: Arc<Mutex<HashMap<String, FakeSequence>>>,
}

impl FakeDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> FakeSession {
        FakeSession {
            db: self.clone(),
            currvals: Mutex::new(HashMap::new()),
            statements: Mutex::new(Vec::new()),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sequences.lock().unwrap().contains_key(name)
    }

    fn create(&self, sql: &str) -> Result<(), sqlx::Error> {
        let mut tokens = sql.split_whitespace().skip(2);
        let name = tokens
            .next()
            .ok_or_else(|| syntax_error(sql))?
            .to_string();

        let mut increment = 1_i64;
        let mut min = None;
        let mut max = None;
        let mut start = None;
        let mut cycle = false;

        while let Some(token) = tokens.next() {
            match token {
                "INCREMENT" => {
                    if tokens.next() != Some("BY") {
                        return Err(syntax_error(sql));
                    }
                    increment = number(tokens.next(), sql)?;
                }
                "MINVALUE" => min = Some(number(tokens.next(), sql)?),
                "MAXVALUE" => max = Some(number(tokens.next(), sql)?),
                "START" => start = Some(number(tokens.next(), sql)?),
                "CYCLE" => cycle = true,
                "NO" => {
                    if tokens.next() != Some("CYCLE") {
                        return Err(syntax_error(sql));
                    }
                    cycle = false;
                }
                _ => return Err(syntax_error(sql)),
            }
        }

        if increment == 0 {
            return Err(db_error("22023", "INCREMENT must not be zero"));
        }
        let (min, max) = if increment > 0 {
            (min.unwrap_or(1), max.unwrap_or(i64::MAX))
        } else {
            (min.unwrap_or(i64::MIN), max.unwrap_or(-1))
        };
        if min >= max {
            return Err(db_error(
                "22023",
                format!("MINVALUE ({min}) must be less than MAXVALUE ({max})"),
            ));
        }
        let start = start.unwrap_or(if increment > 0 { min } else { max });
        if start < min || start > max {
            return Err(db_error(
                "22023",
                format!("START value ({start}) cannot be outside MINVALUE ({min}) and MAXVALUE ({max})"),
            ));
        }

        let mut sequences = self.sequences.lock().unwrap();
        if sequences.contains_key(&name) {
            return Err(db_error(
                "42P07",
                format!("relation \"{name}\" already exists"),
            ));
        }
        sequences.insert(
            name,
            FakeSequence {
                increment,
                min,
                max,
                last: start,
                called: false,
                cycle,
            },
        );
        Ok(())
    }

    fn drop_sequence(&self, sql: &str) -> Result<(), sqlx::Error> {
        let name = sql
            .strip_prefix("DROP SEQUENCE ")
            .ok_or_else(|| syntax_error(sql))?;
        match self.sequences.lock().unwrap().remove(name) {
            Some(_) => Ok(()),
            None => Err(undefined(name)),
        }
    }

    fn nextval(&self, name: &str) -> Result<i64, sqlx::Error> {
        let mut sequences = self.sequences.lock().unwrap();
        let sequence = sequences.get_mut(name).ok_or_else(|| undefined(name))?;
        sequence.advance(name)
    }
}

/// One database session.
#[derive(Debug)]
pub struct FakeSession {
    db: FakeDatabase,
    currvals: Mutex<HashMap<String, i64>>,
    statements: Mutex<Vec<String>>,
}

impl FakeSession {
    pub fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }

    fn record(&self, sql: &str) {
        self.statements.lock().unwrap().push(sql.to_string());
    }
}

impl Connector for FakeSession {
    async fn execute(&self, sql: &str) -> Result<(), sqlx::Error> {
        self.record(sql);
        if sql.starts_with("CREATE SEQUENCE ") {
            self.db.create(sql)
        } else if sql.starts_with("DROP SEQUENCE ") {
            self.db.drop_sequence(sql)
        } else {
            Err(syntax_error(sql))
        }
    }

    async fn select_scalar(&self, sql: &str) -> Result<i64, sqlx::Error> {
        self.record(sql);
        if let Some(literal) = call_argument(sql, "nextval") {
            let name = unquote(literal).ok_or_else(|| syntax_error(sql))?;
            let value = self.db.nextval(&name)?;
            self.currvals.lock().unwrap().insert(name, value);
            Ok(value)
        } else if let Some(literal) = call_argument(sql, "currval") {
            let name = unquote(literal).ok_or_else(|| syntax_error(sql))?;
            if !self.db.contains(&name) {
                return Err(undefined(&name));
            }
            self.currvals
                .lock()
                .unwrap()
                .get(&name)
                .copied()
                .ok_or_else(|| {
                    db_error(
                        "55000",
                        format!("currval of sequence \"{name}\" is not yet defined in this session"),
                    )
                })
        } else {
            Err(syntax_error(sql))
        }
    }
}

fn call_argument<'a>(sql: &'a str, function: &str) -> Option<&'a str> {
    sql.strip_prefix("SELECT ")?
        .strip_prefix(function)?
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn unquote(literal: &str) -> Option<String> {
    let inner = literal.strip_prefix('\'')?.strip_suffix('\'')?;
    Some(inner.replace("''", "'"))
}

fn number(token: Option<&str>, sql: &str) -> Result<i64, sqlx::Error> {
    token
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| syntax_error(sql))
}

fn undefined(name: &str) -> sqlx::Error {
    db_error("42P01", format!("relation \"{name}\" does not exist"))
}

fn syntax_error(sql: &str) -> sqlx::Error {
    db_error("42601", format!("syntax error in {sql:?}"))
}
