#[cfg(test)]
mod tests {
    use anyhow::Result;
    use chrono::{NaiveDate, NaiveDateTime};
    use kintai::libs::clock::Clock;
    use kintai::libs::config::ScheduleConfig;
    use kintai::libs::context::{ActorContext, Role};
    use kintai::libs::error::AttendanceError;
    use kintai::libs::reconcile::AttendanceReconciler;
    use kintai::libs::record::{AttendanceLedger, AttendanceRecord, DailyAttendanceEdit, EditForm};
    use kintai::libs::schedule::ConfigSchedule;

    /// In-memory ledger counting its insert and update calls.
    #[derive(Default)]
    struct RecordingLedger {
        records: Vec<AttendanceRecord>,
        inserts: usize,
        updates: usize,
        next_id: i64,
    }

    impl RecordingLedger {
        fn with_records(records: Vec<AttendanceRecord>) -> Self {
            let next_id = records.iter().filter_map(|r| r.id).max().unwrap_or(0) + 1;
            RecordingLedger {
                records,
                inserts: 0,
                updates: 0,
                next_id,
            }
        }
    }

    impl AttendanceLedger for RecordingLedger {
        fn find_by_user_and_date(
            &mut self,
            user_id: i64,
            date: NaiveDate,
            include_deleted: bool,
        ) -> Result<Option<AttendanceRecord>> {
            Ok(self
                .records
                .iter()
                .find(|r| r.user_id == user_id && r.training_date == date && (include_deleted || !r.deleted))
                .cloned())
        }

        fn find_all_by_user(&mut self, user_id: i64) -> Result<Vec<AttendanceRecord>> {
            let mut records: Vec<AttendanceRecord> =
                self.records.iter().filter(|r| r.user_id == user_id && !r.deleted).cloned().collect();
            records.sort_by_key(|r| r.training_date);
            Ok(records)
        }

        fn insert(&mut self, record: &AttendanceRecord) -> Result<i64> {
            self.inserts += 1;
            let id = self.next_id;
            self.next_id += 1;
            let mut stored = record.clone();
            stored.id = Some(id);
            self.records.push(stored);
            Ok(id)
        }

        fn update(&mut self, record: &AttendanceRecord) -> Result<()> {
            self.updates += 1;
            if let Some(stored) = self.records.iter_mut().find(|r| r.id == record.id) {
                *stored = record.clone();
            }
            Ok(())
        }

        fn count_missing_today(&mut self, user_id: i64, date: NaiveDate) -> Result<i64> {
            Ok(self
                .records
                .iter()
                .filter(|r| r.user_id == user_id && r.training_date <= date && r.start_time.is_empty() && !r.deleted)
                .count() as i64)
        }
    }

    struct FixedClock {
        now: NaiveDateTime,
    }

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.now
        }
    }

    fn clock() -> FixedClock {
        FixedClock {
            now: NaiveDate::from_ymd_opt(2024, 4, 10).unwrap().and_hms_opt(20, 0, 0).unwrap(),
        }
    }

    fn schedule() -> ConfigSchedule {
        ConfigSchedule::from_config(&ScheduleConfig::default()).unwrap()
    }

    fn trainee(user_id: i64) -> ActorContext {
        ActorContext {
            user_id,
            course_id: 1,
            user_name: "Taro".to_string(),
            role: Role::Trainee,
        }
    }

    fn edit_row(record_id: Option<i64>, date: &str) -> DailyAttendanceEdit {
        DailyAttendanceEdit {
            record_id,
            training_date: date.to_string(),
            start_hour: None,
            start_minute: None,
            end_hour: None,
            end_minute: None,
            blank_time_code: None,
            note: String::new(),
            status_label: String::new(),
        }
    }

    fn form(user_id: i64, rows: Vec<DailyAttendanceEdit>) -> EditForm {
        EditForm {
            user_id,
            user_name: String::new(),
            blank_time_options: Vec::new(),
            rows,
        }
    }

    fn existing_record(id: i64, user_id: i64, date: &str) -> AttendanceRecord {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        let created = date.and_hms_opt(9, 0, 0).unwrap();
        let mut record = AttendanceRecord::blank(user_id, date, user_id, created);
        record.id = Some(id);
        record.start_time = "09:00".to_string();
        record.status = 1;
        record
    }

    #[test]
    fn test_matched_id_updates_never_inserts() {
        let mut ledger = RecordingLedger::with_records(vec![existing_record(10, 1, "2024-04-01")]);
        let schedule = schedule();
        let clock = clock();
        let ctx = trainee(1);

        let mut row = edit_row(Some(10), "2024-04-01");
        row.start_hour = Some(9);
        row.start_minute = Some(30);
        row.end_hour = Some(17);
        row.end_minute = Some(30);
        row.blank_time_code = Some(1);
        row.note = "doctor visit".to_string();

        AttendanceReconciler::new(&mut ledger, &schedule, &clock)
            .apply(&ctx, &form(1, vec![row]))
            .unwrap();

        assert_eq!(ledger.updates, 1);
        assert_eq!(ledger.inserts, 0);

        let record = &ledger.records[0];
        assert_eq!(record.start_time, "09:30");
        assert_eq!(record.end_time, "17:30");
        assert_eq!(record.status, 4); // late and left early
        assert_eq!(record.blank_time, Some(1));
        assert_eq!(record.note, "doctor visit");
        assert_eq!(record.modified_by, 1);
        assert_eq!(record.modified_at, clock.now);
    }

    #[test]
    fn test_unmatched_id_degrades_to_insert() {
        let mut ledger = RecordingLedger::default();
        let schedule = schedule();
        let clock = clock();
        let ctx = trainee(1);

        // Stale id from an outdated form.
        let row = edit_row(Some(999), "2024-04-01");
        AttendanceReconciler::new(&mut ledger, &schedule, &clock)
            .apply(&ctx, &form(1, vec![row]))
            .unwrap();

        assert_eq!(ledger.inserts, 1);
        assert_eq!(ledger.updates, 0);
        assert_eq!(ledger.records[0].training_date, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
    }

    #[test]
    fn test_new_row_inserted_with_derived_status() {
        let mut ledger = RecordingLedger::default();
        let schedule = schedule();
        let clock = clock();
        let ctx = trainee(1);

        let mut row = edit_row(None, "2024-04-01");
        row.start_hour = Some(10);
        row.start_minute = Some(0);
        row.end_hour = Some(17);
        row.end_minute = Some(0);
        row.blank_time_code = Some(2);

        AttendanceReconciler::new(&mut ledger, &schedule, &clock)
            .apply(&ctx, &form(1, vec![row]))
            .unwrap();

        assert_eq!(ledger.inserts, 1);
        let record = &ledger.records[0];
        assert_eq!(record.start_time, "10:00");
        assert_eq!(record.end_time, "17:00");
        assert_eq!(record.status, 4); // late and left early
        assert_eq!(record.blank_time, Some(2)); // stored verbatim
        assert_eq!(record.created_by, 1);
        assert_eq!(record.created_at, clock.now);
    }

    #[test]
    fn test_absent_label_wins_over_times() {
        let mut ledger = RecordingLedger::with_records(vec![existing_record(10, 1, "2024-04-01")]);
        let schedule = schedule();
        let clock = clock();
        let ctx = trainee(1);

        let mut row = edit_row(Some(10), "2024-04-01");
        row.start_hour = Some(9);
        row.start_minute = Some(0);
        row.end_hour = Some(18);
        row.end_minute = Some(0);
        row.status_label = "Absent".to_string();

        AttendanceReconciler::new(&mut ledger, &schedule, &clock)
            .apply(&ctx, &form(1, vec![row]))
            .unwrap();

        let record = &ledger.records[0];
        assert_eq!(record.status, 5); // absent
        // Entered times are still kept on the row.
        assert_eq!(record.start_time, "09:00");
        assert_eq!(record.end_time, "18:00");
    }

    #[test]
    fn test_empty_times_clear_status_to_none() {
        let mut record = existing_record(10, 1, "2024-04-01");
        record.status = 5; // previously marked absent
        let mut ledger = RecordingLedger::with_records(vec![record]);
        let schedule = schedule();
        let clock = clock();
        let ctx = trainee(1);

        let row = edit_row(Some(10), "2024-04-01");
        AttendanceReconciler::new(&mut ledger, &schedule, &clock)
            .apply(&ctx, &form(1, vec![row]))
            .unwrap();

        let record = &ledger.records[0];
        assert_eq!(record.status, 0); // none
        assert_eq!(record.start_time, "");
        assert_eq!(record.end_time, "");
    }

    #[test]
    fn test_partial_time_uses_present_side_only() {
        let mut ledger = RecordingLedger::default();
        let schedule = schedule();
        let clock = clock();
        let ctx = trainee(1);

        // A missing minute leaves the whole start unset.
        let mut row = edit_row(None, "2024-04-01");
        row.start_hour = Some(9);
        row.end_hour = Some(17);
        row.end_minute = Some(30);

        AttendanceReconciler::new(&mut ledger, &schedule, &clock)
            .apply(&ctx, &form(1, vec![row]))
            .unwrap();

        let record = &ledger.records[0];
        assert_eq!(record.start_time, "");
        assert_eq!(record.end_time, "17:30");
        assert_eq!(record.status, 3); // left early, missing start is no violation
    }

    #[test]
    fn test_malformed_date_fails_without_store_calls() {
        let mut ledger = RecordingLedger::default();
        let schedule = schedule();
        let clock = clock();
        let ctx = trainee(1);

        let row = edit_row(None, "2024-13-99");
        let err = AttendanceReconciler::new(&mut ledger, &schedule, &clock)
            .apply(&ctx, &form(1, vec![row]))
            .unwrap_err();

        assert!(matches!(err, AttendanceError::DateParse(_)));
        assert_eq!(ledger.inserts, 0);
        assert_eq!(ledger.updates, 0);
    }

    #[test]
    fn test_out_of_range_time_fails_typed() {
        let mut ledger = RecordingLedger::default();
        let schedule = schedule();
        let clock = clock();
        let ctx = trainee(1);

        let mut row = edit_row(None, "2024-04-01");
        row.start_hour = Some(99);
        row.start_minute = Some(5);

        let err = AttendanceReconciler::new(&mut ledger, &schedule, &clock)
            .apply(&ctx, &form(1, vec![row]))
            .unwrap_err();
        assert!(matches!(err, AttendanceError::TimeParse(_)));
    }

    #[test]
    fn test_mentor_edits_target_user() {
        let mut ledger = RecordingLedger::default();
        let schedule = schedule();
        let clock = clock();
        let mentor = ActorContext {
            user_id: 99,
            course_id: 1,
            user_name: "Mentor".to_string(),
            role: Role::Mentor,
        };

        let mut row = edit_row(None, "2024-04-01");
        row.start_hour = Some(9);
        row.start_minute = Some(0);

        AttendanceReconciler::new(&mut ledger, &schedule, &clock)
            .apply(&mentor, &form(7, vec![row]))
            .unwrap();

        let record = &ledger.records[0];
        assert_eq!(record.user_id, 7);
        assert_eq!(record.created_by, 99);
        assert_eq!(record.modified_by, 99);
    }

    #[test]
    fn test_every_row_persists_exactly_once() {
        let mut ledger = RecordingLedger::with_records(vec![existing_record(10, 1, "2024-04-01")]);
        let schedule = schedule();
        let clock = clock();
        let ctx = trainee(1);

        let rows = vec![
            edit_row(Some(10), "2024-04-01"),
            edit_row(None, "2024-04-02"),
            edit_row(Some(555), "2024-04-03"),
        ];
        AttendanceReconciler::new(&mut ledger, &schedule, &clock)
            .apply(&ctx, &form(1, rows))
            .unwrap();

        assert_eq!(ledger.updates, 1);
        assert_eq!(ledger.inserts, 2);
        assert_eq!(ledger.records.len(), 3);
    }

    #[test]
    fn test_update_preserves_creation_audit() {
        let original = existing_record(10, 1, "2024-04-01");
        let created_at = original.created_at;
        let mut ledger = RecordingLedger::with_records(vec![original]);
        let schedule = schedule();
        let clock = clock();
        let ctx = trainee(1);

        let mut row = edit_row(Some(10), "2024-04-01");
        row.start_hour = Some(9);
        row.start_minute = Some(15);

        AttendanceReconciler::new(&mut ledger, &schedule, &clock)
            .apply(&ctx, &form(1, vec![row]))
            .unwrap();

        let record = &ledger.records[0];
        assert_eq!(record.created_at, created_at);
        assert_eq!(record.modified_at, clock.now);
    }
}
