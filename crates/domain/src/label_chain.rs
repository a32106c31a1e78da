/// The ordered ancestor names of a domain, most specific first, derived by
/// successively stripping the leftmost label: `a.b.example.com` yields
/// `a.b.example.com`, `b.example.com`, `example.com`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelChain {
    levels: Vec<String>,
}

impl LabelChain {
    pub fn new(domain: &str) -> Self {
        let trimmed = domain.trim_end_matches('.');
        let labels: Vec<&str> = trimmed.split('.').filter(|label| !label.is_empty()).collect();

        let levels = (0..labels.len()).map(|i| labels[i..].join(".")).collect();

        Self { levels }
    }

    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.levels.iter()
    }
}

impl<'a> IntoIterator for &'a LabelChain {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}
