//! The Synodal versification restricted to the protocanonical books.

use super::{german, kjv, mt, nrsv, synodal, vulg};
use super::CanonBook;

pub(super) const DANIEL: CanonBook = CanonBook::new(
    "Daniel",
    "Dan",
    "Dan",
    &[
        21, 49, 33, 34, 31, 28, 28, 27, 27, 21, 45, 13,
    ],
);

pub(super) const OT: &[CanonBook] = &[
    kjv::GENESIS,
    kjv::EXODUS,
    kjv::LEVITICUS,
    kjv::NUMBERS,
    kjv::DEUTERONOMY,
    kjv::JOSHUA,
    kjv::JUDGES,
    kjv::RUTH,
    kjv::SAMUEL_1,
    kjv::SAMUEL_2,
    kjv::KINGS_1,
    kjv::KINGS_2,
    kjv::CHRONICLES_1,
    kjv::CHRONICLES_2,
    kjv::EZRA,
    kjv::NEHEMIAH,
    kjv::ESTHER,
    synodal::JOB,
    vulg::PSALMS,
    kjv::PROVERBS,
    kjv::ECCLESIASTES,
    kjv::SONG,
    kjv::ISAIAH,
    kjv::JEREMIAH,
    kjv::LAMENTATIONS,
    kjv::EZEKIEL,
    DANIEL,
    kjv::HOSEA,
    kjv::JOEL,
    kjv::AMOS,
    kjv::OBADIAH,
    mt::JONAH,
    kjv::MICAH,
    kjv::NAHUM,
    kjv::HABAKKUK,
    kjv::ZEPHANIAH,
    kjv::HAGGAI,
    kjv::ZECHARIAH,
    kjv::MALACHI,
];

pub(super) const NT: &[CanonBook] = &[
    kjv::MATTHEW,
    kjv::MARK,
    kjv::LUKE,
    kjv::JOHN,
    german::ACTS,
    kjv::JAMES,
    kjv::PETER_1,
    kjv::PETER_2,
    kjv::JOHN_1,
    kjv::JOHN_2,
    nrsv::JOHN_3,
    kjv::JUDE,
    synodal::ROMANS,
    kjv::CORINTHIANS_1,
    german::CORINTHIANS_2,
    kjv::GALATIANS,
    kjv::EPHESIANS,
    kjv::PHILIPPIANS,
    kjv::COLOSSIANS,
    kjv::THESSALONIANS_1,
    kjv::THESSALONIANS_2,
    kjv::TIMOTHY_1,
    kjv::TIMOTHY_2,
    kjv::TITUS,
    kjv::PHILEMON,
    kjv::HEBREWS,
    kjv::REVELATION,
];
