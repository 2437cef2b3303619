//! Books outside the 66-book Protestant canon, shared by the schemes that carry them.
//!
//! Where traditions number a book differently, each numbering gets its own
//! constant, suffixed with the tradition it comes from.

use super::CanonBook;

pub(super) const ESDRAS_1: CanonBook = CanonBook::new(
    "I Esdras",
    "1Esd",
    "1Esd",
    &[
        58, 30, 24, 63, 73, 34, 15, 96, 55,
    ],
);

pub(super) const ESDRAS_2: CanonBook = CanonBook::new(
    "II Esdras",
    "2Esd",
    "2Esd",
    &[
        40, 48, 36, 52, 56, 59, 70, 63, 47, 59, 46, 51, 58, 48, 63,
        78,
    ],
);

pub(super) const TOBIT: CanonBook = CanonBook::new(
    "Tobit",
    "Tob",
    "Tob",
    &[
        22, 14, 17, 21, 22, 17, 18, 21, 6, 12, 19, 22, 18, 15,
    ],
);

pub(super) const JUDITH: CanonBook = CanonBook::new(
    "Judith",
    "Jdt",
    "Jdt",
    &[
        16, 28, 10, 15, 24, 21, 32, 36, 14, 23, 23, 20, 20, 19, 13,
        25,
    ],
);

pub(super) const ADDITIONS_TO_ESTHER: CanonBook = CanonBook::new(
    "Additions to Esther",
    "AddEsth",
    "AddEsth",
    &[
        0, 0, 0, 0, 0, 0, 0, 0, 0, 13, 12, 6, 18, 19, 16,
        24,
    ],
);

pub(super) const WISDOM: CanonBook = CanonBook::new(
    "Wisdom",
    "Wis",
    "Wis",
    &[
        16, 24, 19, 20, 23, 25, 30, 21, 18, 21, 26, 27, 19, 31, 19,
        29, 21, 25, 22,
    ],
);

pub(super) const SIRACH: CanonBook = CanonBook::new(
    "Sirach",
    "Sir",
    "Sir",
    &[
        30, 18, 31, 31, 15, 37, 36, 19, 18, 31, 34, 18, 26, 27, 20,
        30, 32, 33, 30, 32, 28, 27, 28, 34, 26, 29, 30, 26, 28, 25,
        31, 24, 31, 26, 20, 26, 31, 34, 35, 30, 24, 25, 33, 23, 26,
        20, 25, 25, 16, 29, 30,
    ],
);

pub(super) const BARUCH: CanonBook = CanonBook::new(
    "Baruch",
    "Bar",
    "Bar",
    &[
        22, 35, 37, 37, 9, 73,
    ],
);

pub(super) const PRAYER_OF_AZARIAH: CanonBook = CanonBook::new(
    "Prayer of Azariah",
    "PrAzar",
    "PrAzar",
    &[
        68,
    ],
);

pub(super) const SUSANNA: CanonBook = CanonBook::new(
    "Susanna",
    "Sus",
    "Sus",
    &[
        64,
    ],
);

pub(super) const BEL: CanonBook = CanonBook::new(
    "Bel and the Dragon",
    "Bel",
    "Bel",
    &[
        42,
    ],
);

pub(super) const PRAYER_OF_MANASSES: CanonBook = CanonBook::new(
    "Prayer of Manasses",
    "PrMan",
    "PrMan",
    &[
        15,
    ],
);

pub(super) const MACCABEES_1: CanonBook = CanonBook::new(
    "I Maccabees",
    "1Macc",
    "1Macc",
    &[
        64, 70, 60, 61, 68, 63, 50, 32, 73, 89, 74, 53, 53, 49, 41,
        24,
    ],
);

pub(super) const MACCABEES_2: CanonBook = CanonBook::new(
    "II Maccabees",
    "2Macc",
    "2Macc",
    &[
        36, 32, 40, 50, 27, 31, 42, 36, 29, 38, 38, 45, 26, 46, 39,
    ],
);

pub(super) const TOBIT_NRSV: CanonBook = CanonBook::new(
    "Tobit",
    "Tob",
    "Tob",
    &[
        22, 14, 17, 21, 22, 18, 18, 21, 6, 13, 18, 22, 18, 15,
    ],
);

pub(super) const JUDITH_NRSV: CanonBook = CanonBook::new(
    "Judith",
    "Jdt",
    "Jdt",
    &[
        16, 28, 10, 15, 24, 21, 32, 36, 14, 23, 23, 20, 20, 19, 14,
        25,
    ],
);

pub(super) const ESTHER_GREEK: CanonBook = CanonBook::new(
    "Esther (Greek)",
    "EsthGr",
    "EsthGr",
    &[
        22, 23, 15, 17, 14, 14, 10, 17, 32, 13, 12, 6, 18, 19, 16,
        24,
    ],
);

pub(super) const SIRACH_NRSV: CanonBook = CanonBook::new(
    "Sirach",
    "Sir",
    "Sir",
    &[
        30, 18, 31, 31, 15, 37, 36, 19, 18, 31, 34, 18, 26, 27, 20,
        30, 32, 33, 30, 31, 28, 27, 27, 34, 26, 29, 30, 26, 28, 25,
        31, 24, 33, 31, 26, 31, 31, 34, 35, 30, 22, 25, 33, 23, 26,
        20, 25, 25, 16, 29, 30,
    ],
);

pub(super) const ADDITIONAL_PSALM: CanonBook = CanonBook::new(
    "Additional Psalm",
    "AddPs",
    "AddPs",
    &[
        7,
    ],
);

pub(super) const MACCABEES_3: CanonBook = CanonBook::new(
    "III Maccabees",
    "3Macc",
    "3Macc",
    &[
        29, 33, 30, 21, 51, 41, 23,
    ],
);

pub(super) const ESDRAS_2_NRSV: CanonBook = CanonBook::new(
    "II Esdras",
    "2Esd",
    "2Esd",
    &[
        40, 48, 36, 52, 56, 59, 140, 63, 47, 59, 46, 51, 58, 48, 63,
        78,
    ],
);

pub(super) const MACCABEES_4: CanonBook = CanonBook::new(
    "IV Maccabees",
    "4Macc",
    "4Macc",
    &[
        35, 24, 21, 26, 38, 35, 23, 29, 32, 21, 27, 20, 27, 20, 32,
        25, 24, 24,
    ],
);

pub(super) const JUDITH_VULGATE: CanonBook = CanonBook::new(
    "Judith",
    "Jdt",
    "Jdt",
    &[
        12, 18, 15, 17, 29, 21, 25, 34, 19, 20, 21, 20, 31, 18, 15,
        31,
    ],
);

pub(super) const TOBIT_VULGATE: CanonBook = CanonBook::new(
    "Tobit",
    "Tob",
    "Tob",
    &[
        25, 23, 25, 23, 28, 22, 20, 24, 12, 13, 21, 22, 23, 17,
    ],
);

pub(super) const BARUCH_VULGATE: CanonBook = CanonBook::new(
    "Baruch",
    "Bar",
    "Bar",
    &[
        22, 35, 38, 37, 9, 72,
    ],
);

pub(super) const MACCABEES_1_VULGATE: CanonBook = CanonBook::new(
    "I Maccabees",
    "1Macc",
    "1Macc",
    &[
        64, 70, 60, 61, 68, 63, 50, 32, 73, 89, 74, 54, 54, 49, 41,
        24,
    ],
);

pub(super) const MACCABEES_2_VULGATE: CanonBook = CanonBook::new(
    "II Maccabees",
    "2Macc",
    "2Macc",
    &[
        36, 33, 40, 50, 27, 31, 42, 36, 29, 38, 38, 46, 26, 46, 40,
    ],
);

pub(super) const ADDITIONS_TO_ESTHER_LUTHER: CanonBook = CanonBook::new(
    "Additions to Esther",
    "AddEsth",
    "AddEsth",
    &[
        10, 12, 6, 18, 19, 16, 24,
    ],
);

pub(super) const ADDITIONS_TO_DANIEL: CanonBook = CanonBook::new(
    "Additions to Daniel",
    "AddDan",
    "AddDan",
    &[
        68, 64, 42,
    ],
);

pub(super) const TOBIT_CATHOLIC: CanonBook = CanonBook::new(
    "Tobit",
    "Tob",
    "Tob",
    &[
        22, 14, 17, 21, 23, 19, 17, 21, 6, 14, 19, 22, 18, 15,
    ],
);

pub(super) const WISDOM_VULGATE: CanonBook = CanonBook::new(
    "Wisdom",
    "Wis",
    "Wis",
    &[
        16, 25, 19, 20, 24, 27, 30, 21, 19, 21, 27, 27, 19, 31, 19,
        29, 20, 25, 20,
    ],
);

pub(super) const SIRACH_VULGATE: CanonBook = CanonBook::new(
    "Sirach",
    "Sir",
    "Sir",
    &[
        40, 23, 34, 36, 18, 37, 40, 22, 25, 34, 36, 19, 32, 27, 22,
        31, 31, 33, 28, 33, 31, 33, 38, 47, 36, 28, 33, 30, 35, 27,
        42, 28, 33, 31, 26, 28, 34, 39, 41, 32, 28, 26, 37, 27, 31,
        23, 31, 28, 19, 31, 38,
    ],
);

pub(super) const ESDRAS_1_VULGATE: CanonBook = CanonBook::new(
    "I Esdras",
    "1Esd",
    "1Esd",
    &[
        58, 31, 24, 63, 73, 34, 15, 97, 56,
    ],
);

pub(super) const ESDRAS_2_VULGATE: CanonBook = CanonBook::new(
    "II Esdras",
    "2Esd",
    "2Esd",
    &[
        40, 48, 36, 52, 56, 59, 70, 63, 47, 60, 46, 51, 58, 48, 63,
        78,
    ],
);

pub(super) const LAODICEANS: CanonBook = CanonBook::new(
    "Epistle to the Laodiceans",
    "EpLao",
    "EpLao",
    &[
        20,
    ],
);

pub(super) const EPISTLE_OF_JEREMIAH: CanonBook = CanonBook::new(
    "Epistle of Jeremiah",
    "EpJer",
    "EpJer",
    &[
        72,
    ],
);

pub(super) const BARUCH_SYNODAL: CanonBook = CanonBook::new(
    "Baruch",
    "Bar",
    "Bar",
    &[
        22, 35, 38, 37, 9,
    ],
);

pub(super) const ODES: CanonBook = CanonBook::new(
    "Odes",
    "Odes",
    "Odes",
    &[
        19, 43, 10, 19, 20, 10, 45, 88, 79, 9, 20, 15, 32, 46,
    ],
);

pub(super) const PSALMS_OF_SOLOMON: CanonBook = CanonBook::new(
    "Psalms of Solomon",
    "PssSol",
    "PssSol",
    &[
        8, 37, 12, 25, 19, 6, 10, 34, 11, 8, 9, 6, 12, 10, 13,
        15, 46, 12,
    ],
);
