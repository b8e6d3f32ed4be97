// objective.rs

use crate::error::Result;
use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

pub const DATETIME_FORMAT: &str = "%d-%m-%Y %H:%M";
pub const DATE_FORMAT: &str = "%d-%m-%Y";
pub const TIME_FORMAT: &str = "%H:%M";

const ROW_LEN: usize = 78;
const VAL_COL_LEN: usize = 68;
const FIELD_COL_LEN: usize = 8;

/// One TODO entry. The three date/time fields stay unset until first read,
/// at which point the default is derived once and written back.
pub struct Objective {
    creation_datetime: Option<NaiveDateTime>,
    deadline_date: Option<NaiveDate>,
    deadline_time: Option<NaiveTime>,
    pub theme: String,
    pub task: String,
    // No command flips this yet.
    #[allow(dead_code)]
    pub completed: bool,
}

/// Flat serialized form: five formatted strings, fixed key order.
#[derive(Debug, Serialize, Deserialize)]
pub struct ObjectiveRecord {
    pub creation_datetime: String,
    pub deadline_date: String,
    pub deadline_time: String,
    pub obj_theme: String,
    pub obj_task: String,
}

impl Objective {
    pub fn new(
        creation_datetime: Option<&str>,
        deadline_date: Option<&str>,
        deadline_time: Option<&str>,
        theme: Option<&str>,
        task: Option<&str>,
    ) -> Result<Self> {
        let mut obj = Self {
            creation_datetime: None,
            deadline_date: None,
            deadline_time: None,
            theme: theme.unwrap_or_default().to_string(),
            task: task.unwrap_or_default().to_string(),
            completed: false,
        };
        // Empty strings count as "not supplied", same as absent arguments.
        if let Some(s) = creation_datetime.filter(|s| !s.is_empty()) {
            obj.set_creation_datetime(s)?;
        }
        if let Some(s) = deadline_date.filter(|s| !s.is_empty()) {
            obj.set_deadline_date(s)?;
        }
        if let Some(s) = deadline_time.filter(|s| !s.is_empty()) {
            obj.set_deadline_time(s)?;
        }
        Ok(obj)
    }

    pub fn creation_datetime(&mut self) -> String {
        self.creation_datetime
            .get_or_insert_with(|| Local::now().naive_local())
            .format(DATETIME_FORMAT)
            .to_string()
    }

    pub fn set_creation_datetime(&mut self, value: &str) -> Result<()> {
        self.creation_datetime = Some(NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)?);
        Ok(())
    }

    pub fn deadline_date(&mut self) -> String {
        self.deadline_date
            .get_or_insert_with(|| Local::now().date_naive() + Duration::days(1))
            .format(DATE_FORMAT)
            .to_string()
    }

    pub fn set_deadline_date(&mut self, value: &str) -> Result<()> {
        self.deadline_date = Some(NaiveDate::parse_from_str(value, DATE_FORMAT)?);
        Ok(())
    }

    pub fn deadline_time(&mut self) -> String {
        self.deadline_time
            .get_or_insert(NaiveTime::MIN)
            .format(TIME_FORMAT)
            .to_string()
    }

    pub fn set_deadline_time(&mut self, value: &str) -> Result<()> {
        self.deadline_time = Some(NaiveTime::parse_from_str(value, TIME_FORMAT)?);
        Ok(())
    }

    /// Fixed-width boxed block, 78 columns between the outer pipes.
    pub fn render(&mut self) -> String {
        fn field_row(label: &str, value: &str) -> String {
            format!(
                "|{:<fw$}||{:^vw$}|\n",
                label,
                value,
                fw = FIELD_COL_LEN,
                vw = VAL_COL_LEN
            )
        }

        let deadline = format!("{} {}", self.deadline_date(), self.deadline_time());
        let esign_gridline = format!("|{}|\n", "=".repeat(ROW_LEN));
        let dash_gridline = format!("|{}|\n", "-".repeat(ROW_LEN));

        let mut block = String::new();
        block.push_str(&esign_gridline);
        block.push_str(&field_row("THEME", &self.theme));
        block.push_str(&dash_gridline);
        block.push_str(&field_row("CREATED", &self.creation_datetime()));
        block.push_str(&dash_gridline);
        block.push_str(&field_row("DEADLINE", &deadline));
        block.push_str(&esign_gridline);
        block.push_str(&format!("|{:^rw$}|\n", "TASK", rw = ROW_LEN));
        block.push_str(&esign_gridline);
        for line in textwrap::wrap(&self.task, ROW_LEN) {
            block.push_str(&format!("|{:<rw$}|\n", line, rw = ROW_LEN));
        }
        block.push_str(&esign_gridline);
        block
    }

    pub fn to_record(&mut self) -> ObjectiveRecord {
        ObjectiveRecord {
            creation_datetime: self.creation_datetime(),
            deadline_date: self.deadline_date(),
            deadline_time: self.deadline_time(),
            obj_theme: self.theme.clone(),
            obj_task: self.task.clone(),
        }
    }

    pub fn from_record(record: &ObjectiveRecord) -> Result<Self> {
        Self::new(
            Some(record.creation_datetime.as_str()),
            Some(record.deadline_date.as_str()),
            Some(record.deadline_time.as_str()),
            Some(record.obj_theme.as_str()),
            Some(record.obj_task.as_str()),
        )
    }
}
