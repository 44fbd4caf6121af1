use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Page size used when the client sends no (or an unusable) `length`.
pub const DEFAULT_PAGE_LENGTH: usize = 10;

/// Wire value of `length` meaning "return every filtered row".
pub const ALL_ROWS: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    /// Only the exact token `asc` sorts ascending; anything else, including
    /// an empty or unknown token, sorts descending.
    pub fn parse(token: &str) -> Self {
        if token == "asc" {
            OrderDirection::Asc
        } else {
            OrderDirection::Desc
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Positional index of the column, as the client counts them.
    pub column: usize,
    pub direction: OrderDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLength {
    All,
    Limit(usize),
}

impl PageLength {
    /// `-1` selects every row; other negative values fall back to the
    /// default page size.
    pub fn from_wire(length: i64) -> Self {
        match length {
            ALL_ROWS => PageLength::All,
            n if n < 0 => PageLength::Limit(DEFAULT_PAGE_LENGTH),
            n => PageLength::Limit(n as usize),
        }
    }
}

impl Default for PageLength {
    fn default() -> Self {
        PageLength::Limit(DEFAULT_PAGE_LENGTH)
    }
}

/// Search, order and page parameters of one grid fetch.
///
/// Every field has a usable default, and the parsers below never fail:
/// a field that is missing or malformed simply keeps its default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryRequest {
    pub draw: i64,
    pub search_value: String,
    pub order: Option<Order>,
    pub start: usize,
    pub length: PageLength,
}

impl QueryRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw(mut self, draw: i64) -> Self {
        self.draw = draw;
        self
    }

    pub fn search(mut self, value: &str) -> Self {
        self.search_value = value.to_string();
        self
    }

    pub fn order_by(mut self, column: usize, direction: OrderDirection) -> Self {
        self.order = Some(Order { column, direction });
        self
    }

    pub fn page(mut self, start: usize, length: PageLength) -> Self {
        self.start = start;
        self.length = length;
        self
    }

    /// Parses a url-encoded query string such as
    /// `draw=3&search%5Bvalue%5D=di&order%5B0%5D%5Bcolumn%5D=1&start=0&length=10`.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()))
    }

    /// Parses already-decoded key/value pairs. Bracketed (`search[value]`)
    /// and dotted (`search.value`) keys are both accepted; later pairs win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut raw = RawParams::default();
        for (key, value) in pairs {
            let value = value.as_ref().to_string();
            match &*normalize_key(key.as_ref()) {
                "draw" => raw.draw = Some(value),
                "search.value" => raw.search = Some(value),
                "order.0.column" => raw.order_column = Some(value),
                "order.0.dir" => raw.order_dir = Some(value),
                "start" => raw.start = Some(value),
                "length" => raw.length = Some(value),
                _ => {}
            }
        }
        raw.into_request()
    }

    /// Parses the JSON body form of the same parameters:
    /// `{"draw": 1, "search": {"value": ""}, "order": [{"column": 0, "dir": "asc"}], ...}`.
    pub fn from_json(body: &serde_json::Value) -> Self {
        let text = |v: &serde_json::Value| match v {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        };

        let raw = RawParams {
            draw: body.get("draw").and_then(text),
            search: body
                .get("search")
                .and_then(|s| s.get("value"))
                .and_then(text),
            order_column: body
                .pointer("/order/0/column")
                .and_then(text),
            order_dir: body.pointer("/order/0/dir").and_then(text),
            start: body.get("start").and_then(text),
            length: body.get("length").and_then(text),
        };
        raw.into_request()
    }
}

#[derive(Default)]
struct RawParams {
    draw: Option<String>,
    search: Option<String>,
    order_column: Option<String>,
    order_dir: Option<String>,
    start: Option<String>,
    length: Option<String>,
}

impl RawParams {
    fn into_request(self) -> QueryRequest {
        let int = |v: &Option<String>| v.as_deref().and_then(|s| s.trim().parse::<i64>().ok());

        let order = self
            .order_column
            .as_deref()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .map(|column| Order {
                column,
                direction: OrderDirection::parse(self.order_dir.as_deref().unwrap_or_default()),
            });

        QueryRequest {
            draw: int(&self.draw).unwrap_or(0),
            search_value: self.search.unwrap_or_default(),
            order,
            start: int(&self.start).map(|s| s.max(0) as usize).unwrap_or(0),
            length: int(&self.length)
                .map(PageLength::from_wire)
                .unwrap_or_default(),
        }
    }
}

fn normalize_key(key: &str) -> Cow<'_, str> {
    if key.contains('[') {
        Cow::Owned(key.replace('[', ".").replace(']', ""))
    } else {
        Cow::Borrowed(key)
    }
}
