use indexmap::IndexMap;

const CONTENT_TYPE: &str = "Content-Type";
const ACCEPT: &str = "Accept";
const JSON_MIME: &str = "application/json";

/// Shape of the error produced for a failed response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorKind {
    /// plain message string
    Simple,
    /// message plus status text and the raw response handle
    #[default]
    Full,
}

/// Effective configuration for one client instance. Immutable after
/// construction; concurrent in-flight calls read it freely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub verbose: bool,
    pub error_kind: ErrorKind,
    pub transport: TransportDefaults,
}

/// Transport options applied to every request before per-call fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransportDefaults {
    pub headers: IndexMap<String, String>,
    pub directives: IndexMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let mut headers = IndexMap::new();
        headers.insert(CONTENT_TYPE.to_string(), JSON_MIME.to_string());
        headers.insert(ACCEPT.to_string(), JSON_MIME.to_string());
        Self {
            base_url: String::new(),
            verbose: false,
            error_kind: ErrorKind::Full,
            transport: TransportDefaults {
                headers,
                directives: IndexMap::new(),
            },
        }
    }
}

/// Caller-supplied overrides applied on top of the defaults at construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientOptions {
    pub verbose: Option<bool>,
    pub error_kind: Option<ErrorKind>,
    /// merged into the default headers key by key, override wins on collision
    pub headers: IndexMap<String, String>,
    /// replaces the default directives wholesale when present
    pub directives: Option<IndexMap<String, String>>,
}

impl ClientOptions {
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    pub fn error_kind(mut self, kind: ErrorKind) -> Self {
        self.error_kind = Some(kind);
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    pub fn directive(mut self, name: &str, value: &str) -> Self {
        self.directives
            .get_or_insert_with(IndexMap::new)
            .insert(name.to_string(), value.to_string());
        self
    }
}

/// Two-level merge: top-level fields overridden wholesale, headers merged
/// key by key, directives replaced when present. Pure.
pub fn merge(defaults: ClientConfig, overrides: &ClientOptions) -> ClientConfig {
    let mut config = defaults;
    if let Some(verbose) = overrides.verbose {
        config.verbose = verbose;
    }
    if let Some(error_kind) = overrides.error_kind {
        config.error_kind = error_kind;
    }
    for (name, value) in &overrides.headers {
        config
            .transport
            .headers
            .insert(name.clone(), value.clone());
    }
    if let Some(directives) = &overrides.directives {
        config.transport.directives = directives.clone();
    }
    config
}
