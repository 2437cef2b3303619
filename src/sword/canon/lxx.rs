//! The Septuagint versification, in Rahlfs' book order.

use super::{deutero, kjv, mt, synodal};
use super::CanonBook;

pub(super) const DANIEL: CanonBook = CanonBook::new(
    "Daniel",
    "Dan",
    "Dan",
    &[
        21, 49, 97, 37, 30, 29, 28, 27, 27, 21, 45, 13,
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
    deutero::ESDRAS_1,
    kjv::EZRA,
    kjv::NEHEMIAH,
    kjv::ESTHER,
    deutero::JUDITH,
    deutero::TOBIT,
    deutero::MACCABEES_1,
    deutero::MACCABEES_2,
    deutero::MACCABEES_3,
    deutero::MACCABEES_4,
    synodal::PSALMS,
    deutero::ODES,
    kjv::PROVERBS,
    kjv::ECCLESIASTES,
    kjv::SONG,
    synodal::JOB,
    deutero::WISDOM,
    deutero::SIRACH_NRSV,
    deutero::PSALMS_OF_SOLOMON,
    kjv::HOSEA,
    kjv::AMOS,
    kjv::MICAH,
    kjv::JOEL,
    kjv::OBADIAH,
    mt::JONAH,
    kjv::NAHUM,
    kjv::HABAKKUK,
    kjv::ZEPHANIAH,
    kjv::HAGGAI,
    kjv::ZECHARIAH,
    kjv::MALACHI,
    kjv::ISAIAH,
    kjv::JEREMIAH,
    deutero::BARUCH_SYNODAL,
    kjv::LAMENTATIONS,
    deutero::EPISTLE_OF_JEREMIAH,
    kjv::EZEKIEL,
    deutero::SUSANNA,
    DANIEL,
    deutero::BEL,
];

pub(super) const NT: &[CanonBook] = &[
    kjv::MATTHEW,
    kjv::MARK,
    kjv::LUKE,
    kjv::JOHN,
    kjv::ACTS,
    kjv::ROMANS,
    kjv::CORINTHIANS_1,
    kjv::CORINTHIANS_2,
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
    kjv::JAMES,
    kjv::PETER_1,
    kjv::PETER_2,
    kjv::JOHN_1,
    kjv::JOHN_2,
    kjv::JOHN_3,
    kjv::JUDE,
    kjv::REVELATION,
];
