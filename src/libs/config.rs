//! Configuration management for the kintai application.
//!
//! Settings live in a JSON file in the platform application-data directory,
//! split into optional sections: `user` (who is punching, and in which
//! course and role) and `schedule` (official hours, work weekdays, closed
//! dates, break steps). Missing sections fall back to defaults where that
//! is safe; the user section has no safe default and commands require it.
//!
//! `kintai init` runs an interactive wizard over the same structures.

use crate::libs::context::Role;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// The acting user's identity and role.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserConfig {
    pub user_id: i64,
    pub name: String,
    pub course_id: i64,
    pub role: Role,
}

/// Official hours and workday calendar for the course.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScheduleConfig {
    /// Official start of the training day, "HH:MM".
    pub official_start: String,
    /// Official end of the training day, "HH:MM".
    pub official_end: String,
    /// Work days of the week, 1 = Monday .. 7 = Sunday.
    pub work_weekdays: Vec<u32>,
    /// Dates with no training despite a working weekday, "YYYY-MM-DD".
    #[serde(default)]
    pub closed_dates: Vec<String>,
    /// Break step table in minutes, indexed by the stored blank-time code.
    #[serde(default = "default_blank_time_steps")]
    pub blank_time_steps: Vec<i64>,
}

fn default_blank_time_steps() -> Vec<i64> {
    vec![0, 30, 60, 90, 120, 150, 180]
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            official_start: "09:00".to_string(),
            official_end: "18:00".to_string(),
            work_weekdays: vec![1, 2, 3, 4, 5],
            closed_dates: Vec::new(),
            blank_time_steps: default_blank_time_steps(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleConfig>,
}

impl Config {
    /// Loads the configuration file, or defaults when none exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard; existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [Message::ConfigModuleUser.to_string(), Message::ConfigModuleSchedule.to_string()];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .defaults(&[true, true])
            .interact()?;

        for selection in selected {
            match selection {
                0 => config.user = Some(Self::init_user(&config.user)?),
                1 => config.schedule = Some(Self::init_schedule(&config.schedule)?),
                _ => {}
            }
        }

        Ok(config)
    }

    fn init_user(current: &Option<UserConfig>) -> Result<UserConfig> {
        msg_print!(Message::ConfigModuleUser);
        let default = current.clone().unwrap_or(UserConfig {
            user_id: 1,
            name: String::new(),
            course_id: 1,
            role: Role::Trainee,
        });
        let roles = ["Trainee", "Mentor"];
        let role_default = match default.role {
            Role::Trainee => 0,
            Role::Mentor => 1,
        };
        Ok(UserConfig {
            user_id: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptUserId.to_string())
                .default(default.user_id)
                .interact_text()?,
            name: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptUserName.to_string())
                .default(default.name)
                .interact_text()?,
            course_id: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCourseId.to_string())
                .default(default.course_id)
                .interact_text()?,
            role: match Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRole.to_string())
                .items(&roles)
                .default(role_default)
                .interact()?
            {
                1 => Role::Mentor,
                _ => Role::Trainee,
            },
        })
    }

    fn init_schedule(current: &Option<ScheduleConfig>) -> Result<ScheduleConfig> {
        msg_print!(Message::ConfigModuleSchedule);
        let default = current.clone().unwrap_or_default();

        let weekday_names = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];
        let weekday_defaults: Vec<bool> = (1..=7u32).map(|day| default.work_weekdays.contains(&day)).collect();
        let selected_days = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptWorkWeekdays.to_string())
            .items(&weekday_names)
            .defaults(&weekday_defaults)
            .interact()?;

        let closed: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptClosedDates.to_string())
            .default(default.closed_dates.join(","))
            .allow_empty(true)
            .interact_text()?;

        let steps: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptBlankTimeSteps.to_string())
            .default(
                default
                    .blank_time_steps
                    .iter()
                    .map(|minutes| minutes.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            )
            .interact_text()?;

        Ok(ScheduleConfig {
            official_start: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptOfficialStart.to_string())
                .default(default.official_start)
                .interact_text()?,
            official_end: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptOfficialEnd.to_string())
                .default(default.official_end)
                .interact_text()?,
            work_weekdays: selected_days.into_iter().map(|index| index as u32 + 1).collect(),
            closed_dates: split_list(&closed),
            blank_time_steps: split_list(&steps).iter().filter_map(|value| value.parse().ok()).collect(),
        })
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
