//! The Leningrad Codex versification.
//!
//! Masoretic numbering in the codex's own order, where Chronicles opens the
//! Writings. Old Testament only.

use super::{kjv, mt};
use super::CanonBook;

pub(super) const OT: &[CanonBook] = &[
    mt::GENESIS,
    mt::EXODUS,
    mt::LEVITICUS,
    mt::NUMBERS,
    mt::DEUTERONOMY,
    kjv::JOSHUA,
    kjv::JUDGES,
    mt::SAMUEL_1,
    mt::SAMUEL_2,
    mt::KINGS_1,
    mt::KINGS_2,
    mt::ISAIAH,
    mt::JEREMIAH,
    mt::EZEKIEL,
    mt::HOSEA,
    mt::JOEL,
    kjv::AMOS,
    kjv::OBADIAH,
    mt::JONAH,
    mt::MICAH,
    mt::NAHUM,
    kjv::HABAKKUK,
    kjv::ZEPHANIAH,
    kjv::HAGGAI,
    mt::ZECHARIAH,
    mt::MALACHI,
    mt::CHRONICLES_1,
    mt::CHRONICLES_2,
    mt::PSALMS,
    mt::JOB,
    kjv::PROVERBS,
    kjv::RUTH,
    mt::SONG,
    mt::ECCLESIASTES,
    kjv::LAMENTATIONS,
    kjv::ESTHER,
    mt::DANIEL,
    kjv::EZRA,
    mt::NEHEMIAH,
];

pub(super) const NT: &[CanonBook] = &[];
