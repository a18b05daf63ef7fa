#[derive(Debug, Clone)]
pub enum Message {
    // === ATTENDANCE MESSAGES ===
    AttendanceSaved,
    AttendanceTitle(String),  // user name or id label
    AttendanceEmpty,
    MissingToday(i64),        // count of days without a clock-in

    // === VALIDATION MESSAGES ===
    PunchNotPermitted,
    PunchNotWorkDay,
    PunchAlreadyExists,
    PunchInEmpty,
    PunchTimeRange,
    InvalidDateInput(String),
    InvalidTimeInput(String),

    // === EDIT FORM MESSAGES ===
    EditTemplateWritten(String), // path
    EditNothingToDo,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigUserMissing,
    ConfigModuleUser,
    ConfigModuleSchedule,
    PromptSelectModules,
    PromptUserId,
    PromptUserName,
    PromptCourseId,
    PromptRole,
    PromptOfficialStart,
    PromptOfficialEnd,
    PromptWorkWeekdays,
    PromptClosedDates,
    PromptBlankTimeSteps,

    // === EXPORT MESSAGES ===
    ExportSuccess(String), // path
    ExportNothing,
}
