//! The NRSV versification with the apocryphal and deuterocanonical books
//! appended to the Old Testament.

use super::{deutero, kjv, nrsv};
use super::CanonBook;

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
    kjv::JOB,
    kjv::PSALMS,
    kjv::PROVERBS,
    kjv::ECCLESIASTES,
    kjv::SONG,
    kjv::ISAIAH,
    kjv::JEREMIAH,
    kjv::LAMENTATIONS,
    kjv::EZEKIEL,
    kjv::DANIEL,
    kjv::HOSEA,
    kjv::JOEL,
    kjv::AMOS,
    kjv::OBADIAH,
    kjv::JONAH,
    kjv::MICAH,
    kjv::NAHUM,
    kjv::HABAKKUK,
    kjv::ZEPHANIAH,
    kjv::HAGGAI,
    kjv::ZECHARIAH,
    kjv::MALACHI,
    deutero::TOBIT_NRSV,
    deutero::JUDITH_NRSV,
    deutero::ESTHER_GREEK,
    deutero::WISDOM,
    deutero::SIRACH_NRSV,
    deutero::BARUCH,
    deutero::PRAYER_OF_AZARIAH,
    deutero::SUSANNA,
    deutero::BEL,
    deutero::MACCABEES_1,
    deutero::MACCABEES_2,
    deutero::ESDRAS_1,
    deutero::PRAYER_OF_MANASSES,
    deutero::ADDITIONAL_PSALM,
    deutero::MACCABEES_3,
    deutero::ESDRAS_2_NRSV,
    deutero::MACCABEES_4,
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
    nrsv::JOHN_3,
    kjv::JUDE,
    nrsv::REVELATION,
];
