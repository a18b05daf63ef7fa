#[cfg(test)]
mod tests {
    use kintai::libs::config::{Config, ScheduleConfig, UserConfig};
    use kintai::libs::context::{ActorContext, Role};
    use kintai::libs::schedule::{ConfigSchedule, Schedule};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_without_file_returns_default(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.user.is_none());
        assert!(config.schedule.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            user: Some(UserConfig {
                user_id: 7,
                name: "Taro".to_string(),
                course_id: 3,
                role: Role::Trainee,
            }),
            schedule: Some(ScheduleConfig {
                official_start: "10:00".to_string(),
                official_end: "17:00".to_string(),
                work_weekdays: vec![1, 3, 5],
                closed_dates: vec!["2025-05-05".to_string()],
                blank_time_steps: vec![0, 45],
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.user, config.user);
        assert_eq!(loaded.schedule, config.schedule);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_actor_context_requires_user_section(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(ActorContext::from_config(&config).is_err());

        let config = Config {
            user: Some(UserConfig {
                user_id: 7,
                name: "Taro".to_string(),
                course_id: 3,
                role: Role::Mentor,
            }),
            schedule: None,
        };
        let ctx = ActorContext::from_config(&config).unwrap();
        assert_eq!(ctx.user_id, 7);
        assert_eq!(ctx.course_id, 3);
        assert!(!ctx.is_trainee());
    }

    #[test]
    fn test_schedule_from_config() {
        let schedule = ConfigSchedule::from_config(&ScheduleConfig {
            official_start: "09:00".to_string(),
            official_end: "18:00".to_string(),
            work_weekdays: vec![1, 2, 3, 4, 5],
            closed_dates: vec!["2025-04-01".to_string()],
            blank_time_steps: vec![0, 30],
        })
        .unwrap();

        // Tuesday, but explicitly closed.
        let closed = chrono::NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        assert!(!schedule.is_work_day(1, closed));

        // Ordinary Wednesday.
        let open = chrono::NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
        assert!(schedule.is_work_day(1, open));

        // Saturday outside the configured weekdays.
        let saturday = chrono::NaiveDate::from_ymd_opt(2025, 4, 5).unwrap();
        assert!(!schedule.is_work_day(1, saturday));

        let bounds = schedule.bounds(1, open);
        assert_eq!(bounds.official_start.to_string(), "09:00");
        assert_eq!(bounds.official_end.to_string(), "18:00");
    }

    #[test]
    fn test_schedule_rejects_malformed_section() {
        let mut config = ScheduleConfig::default();
        config.official_start = "late-ish".to_string();
        assert!(ConfigSchedule::from_config(&config).is_err());

        let mut config = ScheduleConfig::default();
        config.closed_dates = vec!["next tuesday".to_string()];
        assert!(ConfigSchedule::from_config(&config).is_err());
    }
}
