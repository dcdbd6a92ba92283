//! Embedded answer word list
//!
//! Property-themed 5-letter words compiled into the binary. One of these is
//! the target word on any given day.

/// Number of daily answer words
pub const DAILY_WORD_COUNT: usize = 80;

/// Property-themed answer words, uppercase, exactly 5 letters each
pub const DAILY_WORDS: [&str; DAILY_WORD_COUNT] = [
    "ADDED", "AGENT", "ALARM", "APART", "ATTIC", "BANKS", "BLOCK", "BRICK",
    "BUILD", "BUYER", "CHAIN", "CHEAP", "CLEAN", "CLOSE", "COURT", "DEEDS",
    "DELTA", "DOORS", "DRIVE", "EAVES", "ELITE", "ENTRY", "FIXED", "FLATS",
    "FLOOR", "FRAME", "FRONT", "GATES", "GRAND", "GRANT", "GREEN", "GROSS",
    "GUIDE", "HALLS", "HANDY", "HOMES", "HOUSE", "INDEX", "LEASE", "LEVEL",
    "LIGHT", "LINKS", "LOANS", "MAJOR", "MANOR", "METRO", "NORTH", "OFFER",
    "ORDER", "OWNED", "OWNER", "PITCH", "PLACE", "PLAZA", "PLOTS", "PRICE",
    "PRIME", "QUOTE", "RATES", "RENTS", "RIVER", "ROOMS", "ROYAL", "SALES",
    "SCALE", "SHARE", "SMART", "SPACE", "STATE", "STOCK", "STORE", "STYLE",
    "SUITE", "TITLE", "TOWER", "TRACK", "URBAN", "VALUE", "VILLA", "WORTH",
];
