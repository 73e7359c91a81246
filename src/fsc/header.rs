//! FSC header record: `FSC1;cols=<c>;rows=<r>;thr=<t>[;key=value ...]`.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::grid::GridSnapshot;

/// Leading token of every FSC document.
pub const FSC_MAGIC: &str = "FSC1";

/// Characters that would split a header entry or the document itself.
const RESERVED: [char; 4] = ['\n', '\r', ';', '='];

/// A header value: numeric when the text is fully numeric, text otherwise.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetaValue {
    Number(f64),
    Text(String),
}

impl MetaValue {
    /// Numeric when non-blank and parseable, otherwise kept verbatim.
    pub fn coerce(raw: &str) -> Self {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            if let Ok(n) = trimmed.parse::<f64>() {
                if !n.is_nan() {
                    return MetaValue::Number(n);
                }
            }
        }
        MetaValue::Text(raw.to_string())
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetaValue::Number(n) => Some(*n),
            MetaValue::Text(_) => None,
        }
    }
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Number(n) => write!(f, "{}", n),
            MetaValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for MetaValue {
    fn from(n: f64) -> Self {
        MetaValue::Number(n)
    }
}

impl From<usize> for MetaValue {
    fn from(n: usize) -> Self {
        MetaValue::Number(n as f64)
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        MetaValue::Text(s.to_string())
    }
}

/// Header metadata of an FSC document.
///
/// `cols`, `rows` and `thr` are the well-known keys; every other key lands
/// in `extra` in header order so the format stays forward-extensible.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FscMeta {
    pub cols: Option<MetaValue>,
    pub rows: Option<MetaValue>,
    pub thr: Option<MetaValue>,
    pub extra: Vec<(String, MetaValue)>,
}

impl FscMeta {
    pub fn new(cols: usize, rows: usize, thr: f64) -> Self {
        Self {
            cols: Some(cols.into()),
            rows: Some(rows.into()),
            thr: Some(thr.into()),
            extra: Vec::new(),
        }
    }

    /// Header describing `grid`.
    pub fn from_grid(grid: &GridSnapshot<'_>) -> Self {
        Self::new(grid.cols(), grid.rows(), grid.threshold())
    }

    /// Fill unset well-known keys from `grid`.
    pub fn or_grid(mut self, grid: &GridSnapshot<'_>) -> Self {
        self.cols.get_or_insert_with(|| grid.cols().into());
        self.rows.get_or_insert_with(|| grid.rows().into());
        self.thr.get_or_insert_with(|| grid.threshold().into());
        self
    }

    /// Append or replace an extension key.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Self {
        self.set(key.into(), value.into());
        self
    }

    /// All set keys, well-known first, then extensions in header order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &MetaValue)> {
        [("cols", &self.cols), ("rows", &self.rows), ("thr", &self.thr)]
            .into_iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k, v)))
            .chain(self.extra.iter().map(|(k, v)| (k.as_str(), v)))
    }

    /// Look up any key, well-known or extension.
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        match key {
            "cols" => self.cols.as_ref(),
            "rows" => self.rows.as_ref(),
            "thr" => self.thr.as_ref(),
            _ => self.extra.iter().find(|(k, _)| k == key).map(|(_, v)| v),
        }
    }

    /// Later assignments to the same key win.
    pub fn set(&mut self, key: String, value: MetaValue) {
        match key.as_str() {
            "cols" => self.cols = Some(value),
            "rows" => self.rows = Some(value),
            "thr" => self.thr = Some(value),
            _ => match self.extra.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => self.extra.push((key, value)),
            },
        }
    }

    /// Parse a header line.
    ///
    /// # Errors
    /// `MissingHeader` when the line does not start with `FSC1`.
    pub fn parse(line: &str) -> Result<Self> {
        if !line.starts_with(FSC_MAGIC) {
            return Err(Error::MissingHeader);
        }

        let mut meta = FscMeta::default();
        for part in line.split(';').skip(1) {
            let mut kv = part.split('=');
            let key = kv.next().unwrap_or_default();
            if key.is_empty() {
                continue;
            }
            let value = kv
                .next()
                .map(MetaValue::coerce)
                .unwrap_or(MetaValue::Text(String::new()));
            meta.set(key.to_string(), value);
        }
        Ok(meta)
    }

    /// Render the header line.
    ///
    /// # Errors
    /// `MissingMeta` when `cols`, `rows` or `thr` is unset, `HeaderValue`
    /// when a key or value contains a line break, `;` or `=`.
    pub fn render(&self) -> Result<String> {
        let cols = self.cols.as_ref().ok_or(Error::MissingMeta { field: "cols" })?;
        let rows = self.rows.as_ref().ok_or(Error::MissingMeta { field: "rows" })?;
        let thr = self.thr.as_ref().ok_or(Error::MissingMeta { field: "thr" })?;

        for (key, value) in self.entries() {
            let text = value.to_string();
            if key.is_empty() || key.contains(RESERVED) || text.contains(RESERVED) {
                return Err(Error::HeaderValue {
                    key: key.to_string(),
                });
            }
        }

        let mut line = format!("{FSC_MAGIC};cols={cols};rows={rows};thr={thr}");
        for (key, value) in &self.extra {
            line.push_str(&format!(";{key}={value}"));
        }
        Ok(line)
    }
}

/// Serializes as a flat object, e.g. `{"cols":4.0,"rows":4.0,"thr":0.5,"name":"heart"}`.
impl Serialize for FscMeta {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.entries() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let meta = FscMeta::new(32, 18, 0.5);
        assert_eq!(meta.render().unwrap(), "FSC1;cols=32;rows=18;thr=0.5");
    }

    #[test]
    fn test_render_extras_in_order() {
        let meta = FscMeta::new(4, 4, 1.0)
            .with_extra("name", "heart")
            .with_extra("v", 2.0);
        assert_eq!(
            meta.render().unwrap(),
            "FSC1;cols=4;rows=4;thr=1;name=heart;v=2"
        );
    }

    #[test]
    fn test_render_missing_field() {
        let meta = FscMeta {
            cols: Some(3usize.into()),
            ..FscMeta::default()
        };
        assert_eq!(meta.render(), Err(Error::MissingMeta { field: "rows" }));
    }

    #[test]
    fn test_render_rejects_reserved_characters() {
        let meta = FscMeta::new(2, 2, 0.5).with_extra("name", "x\nbn0,9,9,1");
        assert_eq!(
            meta.render(),
            Err(Error::HeaderValue { key: "name".into() })
        );

        for bad in ["a;b", "a=b", "a\rb"] {
            let meta = FscMeta::new(2, 2, 0.5).with_extra("tag", bad);
            assert!(meta.render().is_err(), "{bad:?} accepted");
            let meta = FscMeta::new(2, 2, 0.5).with_extra(bad, "ok");
            assert!(meta.render().is_err(), "key {bad:?} accepted");
        }

        let meta = FscMeta {
            cols: Some("4\n".into()),
            ..FscMeta::new(4, 4, 0.5)
        };
        assert_eq!(meta.render(), Err(Error::HeaderValue { key: "cols".into() }));
    }

    #[test]
    fn test_or_grid_keeps_explicit_values() {
        let px = vec![0.0; 6];
        let grid = GridSnapshot::new(3, 2, 0.25, &px).unwrap();
        let meta = FscMeta {
            cols: Some(10usize.into()),
            ..FscMeta::default()
        }
        .or_grid(&grid);
        assert_eq!(meta.render().unwrap(), "FSC1;cols=10;rows=2;thr=0.25");
    }

    #[test]
    fn test_parse() {
        let meta = FscMeta::parse("FSC1;cols=4;rows=4;thr=0.5;author=ana;tag=").unwrap();
        assert_eq!(meta.cols, Some(MetaValue::Number(4.0)));
        assert_eq!(meta.thr.as_ref().and_then(MetaValue::as_f64), Some(0.5));
        assert_eq!(meta.get("author"), Some(&MetaValue::Text("ana".into())));
        assert_eq!(meta.get("tag"), Some(&MetaValue::Text(String::new())));
        assert_eq!(meta.get("missing"), None);
    }

    #[test]
    fn test_parse_skips_empty_keys_and_keeps_last() {
        let meta = FscMeta::parse("FSC1;;=3;cols=2;cols=5;flag").unwrap();
        assert_eq!(meta.cols, Some(MetaValue::Number(5.0)));
        assert_eq!(meta.extra, vec![("flag".to_string(), MetaValue::Text(String::new()))]);
    }

    #[test]
    fn test_parse_rejects_foreign_header() {
        assert_eq!(FscMeta::parse("FSC2;cols=1"), Err(Error::MissingHeader));
        assert_eq!(FscMeta::parse("bn0,1,2,1"), Err(Error::MissingHeader));
    }

    #[test]
    fn test_serialize_flat() {
        let meta = FscMeta::new(4, 2, 0.5).with_extra("name", "heart");
        assert_eq!(
            serde_json::to_string(&meta).unwrap(),
            r#"{"cols":4.0,"rows":2.0,"thr":0.5,"name":"heart"}"#
        );
    }

    #[test]
    fn test_coerce() {
        assert_eq!(MetaValue::coerce("12"), MetaValue::Number(12.0));
        assert_eq!(MetaValue::coerce("-0.25"), MetaValue::Number(-0.25));
        assert_eq!(MetaValue::coerce("12px"), MetaValue::Text("12px".into()));
        assert_eq!(MetaValue::coerce(" "), MetaValue::Text(" ".into()));
    }
}
