//! Whole-engine scenarios: token sequences run the way a shell feeds them.
