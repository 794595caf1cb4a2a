//! Built-in dataset catalog.
//!
//! The WebGraph datasets fetched by default, in download order. Entries
//! marked disabled are kept for reference (they are too large to fetch
//! routinely) and only run when named explicitly.

use crate::task::TaskId;

/// One dataset in the built-in catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DatasetEntry {
    /// Identifier passed to the handler, e.g. `"uk-2007-05@100000"`.
    pub id: &'static str,
    /// Whether the dataset is part of the default batch.
    pub enabled: bool,
}

impl DatasetEntry {
    const fn enabled(id: &'static str) -> Self {
        Self { id, enabled: true }
    }

    const fn disabled(id: &'static str) -> Self {
        Self { id, enabled: false }
    }
}

const BUILTIN_DATASETS: &[DatasetEntry] = &[
    DatasetEntry::enabled("cnr-2000"),
    DatasetEntry::enabled("in-2004"),
    DatasetEntry::enabled("eu-2005"),
    DatasetEntry::enabled("uk-2007-05@100000"),
    DatasetEntry::enabled("uk-2007-05@1000000"),
    DatasetEntry::disabled("uk-2014"),
    DatasetEntry::disabled("eu-2015"),
    DatasetEntry::disabled("gsh-2015"),
    DatasetEntry::enabled("uk-2014-host"),
    DatasetEntry::enabled("eu-2015-host"),
    DatasetEntry::enabled("gsh-2015-host"),
    DatasetEntry::enabled("uk-2014-tpd"),
    DatasetEntry::enabled("eu-2015-tpd"),
    DatasetEntry::enabled("gsh-2015-tpd"),
    DatasetEntry::disabled("clueweb12"),
    DatasetEntry::enabled("uk-2002"),
    DatasetEntry::enabled("indochina-2004"),
    DatasetEntry::enabled("it-2004"),
    DatasetEntry::enabled("arabic-2005"),
    DatasetEntry::enabled("sk-2005"),
    DatasetEntry::enabled("uk-2005"),
    DatasetEntry::enabled("enwiki-2013"),
    DatasetEntry::enabled("enwiki-2015"),
    DatasetEntry::enabled("enwiki-2016"),
    DatasetEntry::enabled("enwiki-2017"),
    DatasetEntry::enabled("enwiki-2018"),
    DatasetEntry::enabled("enwiki-2019"),
    DatasetEntry::enabled("enwiki-2020"),
    DatasetEntry::enabled("enwiki-2021"),
    DatasetEntry::enabled("enwiki-2022"),
    DatasetEntry::enabled("itwiki-2013"),
    DatasetEntry::enabled("eswiki-2013"),
    DatasetEntry::enabled("frwiki-2013"),
    DatasetEntry::enabled("dewiki-2013"),
    DatasetEntry::enabled("enron"),
    DatasetEntry::enabled("amazon-2008"),
    DatasetEntry::enabled("ljournal-2008"),
    DatasetEntry::enabled("orkut-2007"),
    DatasetEntry::enabled("hollywood-2009"),
    DatasetEntry::enabled("hollywood-2011"),
    DatasetEntry::enabled("imdb-2021"),
    DatasetEntry::enabled("dblp-2010"),
    DatasetEntry::enabled("dblp-2011"),
    DatasetEntry::enabled("hu-tel-2006"),
    DatasetEntry::enabled("twitter-2010"),
    DatasetEntry::enabled("wordassociation-2011"),
    DatasetEntry::enabled("fb_it-2007"),
    DatasetEntry::enabled("fb_se-2007"),
    DatasetEntry::enabled("fb_itse-2007"),
    DatasetEntry::enabled("fb_us-2007"),
    DatasetEntry::enabled("fb-2007"),
    DatasetEntry::enabled("fb_it-2008"),
    DatasetEntry::enabled("fb_se-2008"),
    DatasetEntry::enabled("fb_itse-2008"),
    DatasetEntry::enabled("fb_us-2008"),
    DatasetEntry::enabled("fb-2008"),
    DatasetEntry::enabled("fb_it-2009"),
    DatasetEntry::enabled("fb_se-2009"),
    DatasetEntry::enabled("fb_itse-2009"),
    DatasetEntry::enabled("fb_us-2009"),
    DatasetEntry::enabled("fb-2009"),
    DatasetEntry::enabled("fb_it-2010"),
    DatasetEntry::enabled("fb_se-2010"),
    DatasetEntry::enabled("fb_itse-2010"),
    DatasetEntry::enabled("fb_us-2010"),
    DatasetEntry::enabled("fb-2010"),
    DatasetEntry::enabled("fb_it-2011"),
    DatasetEntry::enabled("fb_se-2011"),
    DatasetEntry::enabled("fb_itse-2011"),
    DatasetEntry::enabled("fb_us-2011"),
    DatasetEntry::enabled("fb-2011"),
    DatasetEntry::enabled("fb_it-current"),
    DatasetEntry::enabled("fb_se-current"),
    DatasetEntry::enabled("fb_itse-current"),
    DatasetEntry::enabled("fb_us-current"),
    DatasetEntry::enabled("fb-current"),
    DatasetEntry::enabled("uk-2006-05"),
    DatasetEntry::enabled("uk-2006-06"),
    DatasetEntry::enabled("uk-2006-07"),
    DatasetEntry::enabled("uk-2006-08"),
    DatasetEntry::enabled("uk-2006-c09"),
    DatasetEntry::enabled("uk-2006-10"),
    DatasetEntry::enabled("uk-2006-11"),
    DatasetEntry::enabled("uk-2006-12"),
    DatasetEntry::enabled("uk-2007-01"),
    DatasetEntry::enabled("uk-2007-02"),
    DatasetEntry::enabled("uk-2007-03"),
    DatasetEntry::enabled("uk-2007-04"),
    DatasetEntry::enabled("uk-2007-05"),
    DatasetEntry::enabled("uk-union-2006-06-2007-05"),
    DatasetEntry::enabled("webbase-2001"),
    DatasetEntry::enabled("altavista-2002"),
    DatasetEntry::enabled("altavista-2002-nd"),
];

/// Ordered, read-only dataset catalog.
#[derive(Clone, Copy, Debug)]
pub struct DatasetCatalog {
    entries: &'static [DatasetEntry],
}

impl DatasetCatalog {
    /// The catalog compiled into the binary.
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            entries: BUILTIN_DATASETS,
        }
    }

    /// Every entry, disabled ones included, in catalog order.
    #[must_use]
    pub const fn entries(&self) -> &'static [DatasetEntry] {
        self.entries
    }

    /// Enabled entries in catalog order.
    pub fn enabled(&self) -> impl Iterator<Item = &'static DatasetEntry> {
        self.entries.iter().filter(|entry| entry.enabled)
    }

    /// The default batch: enabled identifiers in catalog order.
    #[must_use]
    pub fn default_tasks(&self) -> Vec<TaskId> {
        self.enabled()
            .filter_map(|entry| TaskId::new(entry.id).ok())
            .collect()
    }

    /// Look up an entry by its exact identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'static DatasetEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}

impl Default for DatasetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
