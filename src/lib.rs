pub mod booking;
pub mod league;

// Re-export booking items
pub use booking::{
    Booking, BookingDraft, BookingPricing, BookingStatus, Ground, RateQuote, SlotError,
    MIN_DURATION_HOURS, SLOT_STEP_HOURS,
    quote, resolve_lighting, resolve_price, snap_duration, validate_duration, validate_slot,
};

// Re-export league items
pub use league::{
    // Data model
    CleanSheets, GoalEvent, League, LeagueDataError, MatchRecord, MatchSide, PlayerRef, Score,
    Team, TeamRef,
    // Normalization
    RawCleanSheets, RawGoalEvent, RawPlayerField, RawTeamField,
    // Standings
    LeagueTable, LeagueTableRow,
    // Leaderboards
    CleanSheetEntry, PlayerTally, ScorerBoard,
    compute_clean_sheet_leaders, compute_top_assists, compute_top_scorers,
    // Statistics
    MatchOutcome, PlayerStats, TeamMatchView, TeamStats,
};
