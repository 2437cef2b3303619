//! Static canon tables, one per versification scheme.
//!
//! A versification fixes which books each testament contains, in which order,
//! and how many verses every chapter has. Different traditions disagree on
//! these boundaries, so every module declares the scheme its index files were
//! laid out with.

mod catholic2;
mod deutero;
mod german;
mod kjv;
mod kjva;
mod leningrad;
mod luther;
mod lxx;
mod mt;
mod nrsv;
mod nrsva;
mod orthodox;
mod synodal;
mod synodalprot;
mod vulg;

use std::fmt;
use std::str::FromStr;

use log::warn;

use super::types::error::{Result, SwordError};
use super::types::models::Testament;

/// One book of a canon table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonBook {
    /// Full name, e.g. `"I Samuel"`.
    pub name: &'static str,
    /// OSIS identifier, e.g. `"1Sam"`.
    pub osis_name: &'static str,
    /// Preferred abbreviation.
    pub preferred_abbreviation: &'static str,
    /// Verse count of every chapter, in order.
    pub chapter_lengths: &'static [u16],
}

impl CanonBook {
    pub const fn new(
        name: &'static str,
        osis_name: &'static str,
        preferred_abbreviation: &'static str,
        chapter_lengths: &'static [u16],
    ) -> Self {
        Self {
            name,
            osis_name,
            preferred_abbreviation,
            chapter_lengths,
        }
    }
}

/// The ordered book lists of both testaments for one scheme.
#[derive(Debug)]
pub struct Canon {
    pub ot: &'static [CanonBook],
    pub nt: &'static [CanonBook],
}

impl Canon {
    pub fn books(&self, testament: Testament) -> &'static [CanonBook] {
        match testament {
            Testament::Old => self.ot,
            Testament::New => self.nt,
        }
    }
}

static KJV: Canon = Canon {
    ot: kjv::OT,
    nt: kjv::NT,
};

static CATHOLIC2: Canon = Canon {
    ot: catholic2::OT,
    nt: catholic2::NT,
};

static GERMAN: Canon = Canon {
    ot: german::OT,
    nt: german::NT,
};

static KJVA: Canon = Canon {
    ot: kjva::OT,
    nt: kjva::NT,
};

static LENINGRAD: Canon = Canon {
    ot: leningrad::OT,
    nt: leningrad::NT,
};

static LUTHER: Canon = Canon {
    ot: luther::OT,
    nt: luther::NT,
};

static LXX: Canon = Canon {
    ot: lxx::OT,
    nt: lxx::NT,
};

static MT: Canon = Canon {
    ot: mt::OT,
    nt: mt::NT,
};

static NRSV: Canon = Canon {
    ot: nrsv::OT,
    nt: nrsv::NT,
};

static NRSVA: Canon = Canon {
    ot: nrsva::OT,
    nt: nrsva::NT,
};

static ORTHODOX: Canon = Canon {
    ot: orthodox::OT,
    nt: orthodox::NT,
};

static SYNODAL: Canon = Canon {
    ot: synodal::OT,
    nt: synodal::NT,
};

static SYNODALPROT: Canon = Canon {
    ot: synodalprot::OT,
    nt: synodalprot::NT,
};

static VULG: Canon = Canon {
    ot: vulg::OT,
    nt: vulg::NT,
};

/// The named versification schemes a SWORD module may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Versification {
    /// KJV numbering, used when a module declares none.
    #[default]
    Default,
    Catholic2,
    German,
    Kjva,
    Leningrad,
    Luther,
    Lxx,
    Mt,
    Nrsv,
    Nrsva,
    Orthodox,
    Synodal,
    SynodalProt,
    Vulg,
}

impl Versification {
    pub const ALL: [Versification; 14] = [
        Versification::Default,
        Versification::Catholic2,
        Versification::German,
        Versification::Kjva,
        Versification::Leningrad,
        Versification::Luther,
        Versification::Lxx,
        Versification::Mt,
        Versification::Nrsv,
        Versification::Nrsva,
        Versification::Orthodox,
        Versification::Synodal,
        Versification::SynodalProt,
        Versification::Vulg,
    ];

    /// The lowercase scheme name as written in module configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            Versification::Default => "default",
            Versification::Catholic2 => "catholic2",
            Versification::German => "german",
            Versification::Kjva => "kjva",
            Versification::Leningrad => "leningrad",
            Versification::Luther => "luther",
            Versification::Lxx => "lxx",
            Versification::Mt => "mt",
            Versification::Nrsv => "nrsv",
            Versification::Nrsva => "nrsva",
            Versification::Orthodox => "orthodox",
            Versification::Synodal => "synodal",
            Versification::SynodalProt => "synodalprot",
            Versification::Vulg => "vulg",
        }
    }

    /// Looks up a scheme by name, substituting [`Versification::Default`] for
    /// anything unrecognised.
    pub fn from_name(name: &str) -> Self {
        Self::from_name_strict(name).unwrap_or_else(|_| {
            warn!("Unknown versification '{}', using default", name);
            Versification::Default
        })
    }

    /// Looks up a scheme by name, failing with [`SwordError::UnknownScheme`].
    ///
    /// `"kjv"` is accepted as an alias of the default scheme.
    pub fn from_name_strict(name: &str) -> Result<Self> {
        let lowered = name.trim().to_ascii_lowercase();
        if lowered == "kjv" {
            return Ok(Versification::Default);
        }
        Self::ALL
            .into_iter()
            .find(|v| v.name() == lowered)
            .ok_or_else(|| SwordError::UnknownScheme(name.to_string()))
    }

    /// The canon table for this scheme.
    pub fn canon(&self) -> &'static Canon {
        match self {
            Versification::Default => &KJV,
            Versification::Catholic2 => &CATHOLIC2,
            Versification::German => &GERMAN,
            Versification::Kjva => &KJVA,
            Versification::Leningrad => &LENINGRAD,
            Versification::Luther => &LUTHER,
            Versification::Lxx => &LXX,
            Versification::Mt => &MT,
            Versification::Nrsv => &NRSV,
            Versification::Nrsva => &NRSVA,
            Versification::Orthodox => &ORTHODOX,
            Versification::Synodal => &SYNODAL,
            Versification::SynodalProt => &SYNODALPROT,
            Versification::Vulg => &VULG,
        }
    }
}

impl FromStr for Versification {
    type Err = SwordError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name_strict(s)
    }
}

impl fmt::Display for Versification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_verses(books: &[CanonBook]) -> u32 {
        books
            .iter()
            .flat_map(|b| b.chapter_lengths.iter())
            .map(|&n| n as u32)
            .sum()
    }

    #[test]
    fn kjv_totals() {
        let canon = Versification::Default.canon();
        assert_eq!(canon.ot.len(), 39);
        assert_eq!(canon.nt.len(), 27);
        assert_eq!(total_verses(canon.ot), 23145);
        assert_eq!(total_verses(canon.nt), 7957);
        let chapters: usize = canon
            .ot
            .iter()
            .chain(canon.nt.iter())
            .map(|b| b.chapter_lengths.len())
            .sum();
        assert_eq!(chapters, 1189);
    }

    #[test]
    fn nrsv_differs_only_in_third_john_and_revelation() {
        let kjv = Versification::Default.canon();
        let nrsv = Versification::Nrsv.canon();
        assert_eq!(total_verses(nrsv.ot), total_verses(kjv.ot));
        assert_eq!(total_verses(nrsv.nt), total_verses(kjv.nt) + 2);

        let differing: Vec<&str> = kjv
            .nt
            .iter()
            .zip(nrsv.nt.iter())
            .filter(|(a, b)| a != b)
            .map(|(a, _)| a.osis_name)
            .collect();
        assert_eq!(differing, vec!["3John", "Rev"]);
    }

    #[test]
    fn every_scheme_has_its_own_table() {
        // (scheme, OT books, NT books, OT verses, NT verses)
        let expected = [
            (Versification::Default, 39, 27, 23145, 7957),
            (Versification::Catholic2, 46, 27, 27614, 7957),
            (Versification::German, 39, 27, 23213, 7957),
            (Versification::Kjva, 53, 27, 28868, 7957),
            (Versification::Leningrad, 39, 0, 23213, 0),
            (Versification::Luther, 49, 27, 27691, 7957),
            (Versification::Lxx, 54, 27, 29416, 7957),
            (Versification::Mt, 39, 0, 23213, 0),
            (Versification::Nrsv, 39, 27, 23145, 7959),
            (Versification::Nrsva, 56, 27, 29836, 7959),
            (Versification::Orthodox, 51, 27, 28669, 7957),
            (Versification::Synodal, 51, 27, 29060, 7956),
            (Versification::SynodalProt, 39, 27, 23211, 7956),
            (Versification::Vulg, 50, 28, 29209, 7977),
        ];
        assert_eq!(expected.len(), Versification::ALL.len());
        for (scheme, ot_books, nt_books, ot_verses, nt_verses) in expected {
            let canon = scheme.canon();
            assert_eq!(canon.ot.len(), ot_books, "{} OT books", scheme);
            assert_eq!(canon.nt.len(), nt_books, "{} NT books", scheme);
            assert_eq!(total_verses(canon.ot), ot_verses, "{} OT verses", scheme);
            assert_eq!(total_verses(canon.nt), nt_verses, "{} NT verses", scheme);
        }
    }

    #[test]
    fn osis_names_are_unique_within_a_scheme() {
        for scheme in Versification::ALL {
            let canon = scheme.canon();
            let mut names: Vec<&str> = canon
                .ot
                .iter()
                .chain(canon.nt.iter())
                .map(|b| b.osis_name)
                .collect();
            let count = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), count, "{}", scheme);
            assert!(
                canon
                    .ot
                    .iter()
                    .chain(canon.nt.iter())
                    .all(|b| !b.chapter_lengths.is_empty()),
                "{} has a book without chapters",
                scheme
            );
        }
    }

    fn osis(books: &[CanonBook]) -> Vec<&'static str> {
        books.iter().map(|b| b.osis_name).collect()
    }

    fn chapters(scheme: Versification, osis_name: &str) -> &'static [u16] {
        let canon = scheme.canon();
        canon
            .ot
            .iter()
            .chain(canon.nt.iter())
            .find(|b| b.osis_name == osis_name)
            .map(|b| b.chapter_lengths)
            .unwrap_or_else(|| panic!("{} lacks {}", scheme, osis_name))
    }

    #[test]
    fn apocrypha_follow_malachi_in_kjva_and_nrsva() {
        let kjva = osis(Versification::Kjva.canon().ot);
        assert_eq!(&kjva[..39], &osis(Versification::Default.canon().ot)[..]);
        assert_eq!(
            &kjva[39..],
            &[
                "1Esd", "2Esd", "Tob", "Jdt", "AddEsth", "Wis", "Sir", "Bar", "PrAzar", "Sus",
                "Bel", "PrMan", "1Macc", "2Macc"
            ]
        );
        let nrsva = osis(Versification::Nrsva.canon().ot);
        assert_eq!(nrsva[39], "Tob");
        assert_eq!(nrsva.last(), Some(&"4Macc"));
        assert_eq!(chapters(Versification::Nrsva, "2Esd")[6], 140);
        assert_eq!(chapters(Versification::Kjva, "2Esd")[6], 70);
    }

    #[test]
    fn hebrew_numbering_in_masoretic_schemes() {
        for scheme in [Versification::Mt, Versification::Leningrad, Versification::German] {
            assert_eq!(chapters(scheme, "Mal"), &[14, 17, 24], "{}", scheme);
            assert_eq!(chapters(scheme, "Joel"), &[20, 27, 5, 21], "{}", scheme);
            assert_eq!(chapters(scheme, "Ps")[2], 9, "{}", scheme);
        }
        let mt = osis(Versification::Mt.canon().ot);
        assert_eq!(&mt[11..14], &["Isa", "Jer", "Ezek"]);
        assert_eq!(mt.last(), Some(&"2Chr"));
        let leningrad = osis(Versification::Leningrad.canon().ot);
        assert_eq!(&leningrad[25..29], &["Mal", "1Chr", "2Chr", "Ps"]);
        assert_eq!(leningrad.last(), Some(&"Neh"));
    }

    #[test]
    fn synodal_orders_catholic_epistles_after_acts() {
        for scheme in [Versification::Synodal, Versification::SynodalProt] {
            let nt = osis(scheme.canon().nt);
            assert_eq!(&nt[4..7], &["Acts", "Jas", "1Pet"], "{}", scheme);
            assert_eq!(&nt[12..14], &["Rom", "1Cor"], "{}", scheme);
        }
        let synodal = Versification::Synodal.canon();
        assert_eq!(chapters(Versification::Synodal, "Ps").len(), 151);
        assert_eq!(chapters(Versification::SynodalProt, "Ps").len(), 150);
        assert_eq!(chapters(Versification::Synodal, "Ps")[8], 39);
        assert_eq!(synodal.ot[14].osis_name, "PrMan");
        assert_eq!(synodal.ot.last().map(|b| b.osis_name), Some("2Esd"));
    }

    #[test]
    fn luther_moves_hebrews_james_and_jude() {
        let nt = osis(Versification::Luther.canon().nt);
        assert_eq!(&nt[22..], &["3John", "Heb", "Jas", "Jude", "Rev"]);
        let ot = osis(Versification::Luther.canon().ot);
        assert_eq!(&ot[39..41], &["Jdt", "Wis"]);
        assert_eq!(ot.last(), Some(&"PrMan"));
    }

    #[test]
    fn catholic_schemes_place_deuterocanon_inline() {
        let catholic = osis(Versification::Catholic2.canon().ot);
        assert_eq!(&catholic[15..21], &["Neh", "Tob", "Jdt", "Esth", "1Macc", "2Macc"]);
        assert_eq!(chapters(Versification::Catholic2, "Esth").len(), 16);
        assert_eq!(chapters(Versification::Catholic2, "Dan").len(), 14);

        let vulg = Versification::Vulg.canon();
        assert_eq!(osis(vulg.nt).last(), Some(&"EpLao"));
        assert_eq!(chapters(Versification::Vulg, "Ps")[8], 39);
        assert_eq!(chapters(Versification::Vulg, "Dan")[2], 100);
    }

    #[test]
    fn septuagint_schemes() {
        let lxx = osis(Versification::Lxx.canon().ot);
        assert!(lxx.contains(&"Odes"));
        assert!(lxx.contains(&"PssSol"));
        assert_eq!(&lxx[lxx.len() - 3..], &["Sus", "Dan", "Bel"]);
        let orthodox = osis(Versification::Orthodox.canon().ot);
        assert_eq!(orthodox.last(), Some(&"4Macc"));
        assert_eq!(chapters(Versification::Orthodox, "Ps").len(), 151);
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        assert_eq!(Versification::from_name("NRSV"), Versification::Nrsv);
        assert_eq!(Versification::from_name("SynodalProt"), Versification::SynodalProt);
        assert_eq!(Versification::from_name("klingon"), Versification::Default);
        assert_eq!(Versification::from_name(""), Versification::Default);
    }

    #[test]
    fn strict_lookup_rejects_unknown_names() {
        assert_eq!(Versification::from_name_strict("kjv").unwrap(), Versification::Default);
        assert!(matches!(
            Versification::from_name_strict("klingon"),
            Err(SwordError::UnknownScheme(name)) if name == "klingon"
        ));
    }

    #[test]
    fn every_scheme_name_round_trips() {
        for v in Versification::ALL {
            assert_eq!(v.name().parse::<Versification>().unwrap(), v);
        }
    }
}
