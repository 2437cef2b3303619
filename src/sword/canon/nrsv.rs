//! The NRSV versification.
//!
//! Identical to KJV except that 3 John has 15 verses and Revelation 12 has 18.

use super::kjv;
use super::CanonBook;

pub(super) const JOHN_3: CanonBook = CanonBook::new(
    "III John",
    "3John",
    "3John",
    &[
        15,
    ],
);

pub(super) const REVELATION: CanonBook = CanonBook::new(
    "Revelation of John",
    "Rev",
    "Rev",
    &[
        20, 29, 22, 11, 14, 17, 17, 13, 21, 11, 19, 18, 18, 20, 8,
        21, 18, 24, 21, 15, 27, 21,
    ],
);

pub(super) const OT: &[CanonBook] = kjv::OT;

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
    JOHN_3,
    kjv::JUDE,
    REVELATION,
];
