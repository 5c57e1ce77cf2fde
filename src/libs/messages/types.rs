use crate::libs::period::Period;

#[derive(Debug, Clone)]
pub enum Message {
    // === MENU MESSAGES ===
    MenuTitle,
    MenuAddEmployee,
    MenuRecordTermination,
    MenuQuarterlyTerminations,
    MenuYearlyTerminations,
    MenuAttritionByDepartment,
    MenuAttritionByDesignation,
    MenuTopReasons,
    MenuExit,
    InvalidChoice,

    // === EMPLOYEE MESSAGES ===
    EmployeeAdded(i64), // id
    EmployeesHeader,
    NoEmployeesFound,
    TerminationRecorded,

    // === ATTRITION MESSAGES ===
    TerminationsCount(Period, i64),
    AttritionByDepartmentHeader,
    AttritionByDesignationHeader,
    TopReasonsHeader,
    ReasonCount(String, i64), // reason, count
    NoTerminationsRecorded,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    UsingDatabase(String), // path

    // === PROMPTS ===
    PromptMenuChoice,
    PromptEmployeeName,
    PromptDepartment,
    PromptDesignation,
    PromptJoiningDate,
    PromptEmployeeId,
    PromptTerminationDate,
    PromptReasonForLeaving,
    PromptAnalysisPeriod(Period), // suggested period
    PromptDatabasePath,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
}
