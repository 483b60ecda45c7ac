//! Descriptor table for the known search endpoints.
//!
//! The FAQ service exposes two public search routes under its admin
//! controller. They differ in query parameter name, and neither requires
//! authentication; the `requires_auth` column exists so any endpoint added
//! later states its auth requirement here instead of in a set-membership
//! check at the call site.

/// The remote search backends exposed by the FAQ service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchEndpoint {
    /// PostgreSQL full-text search (`pg-search`).
    PgSearch,
    /// MongoDB document search (`search`).
    DocSearch,
}

/// Wire-level description of one endpoint: URL path segment, the name of its
/// query parameter, and whether a bearer token must accompany the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointSpec {
    pub path: &'static str,
    pub query_param: &'static str,
    pub requires_auth: bool,
}

const PG_SEARCH: EndpointSpec = EndpointSpec {
    path: "pg-search",
    query_param: "key",
    requires_auth: false,
};

const DOC_SEARCH: EndpointSpec = EndpointSpec {
    path: "search",
    query_param: "query",
    requires_auth: false,
};

impl SearchEndpoint {
    /// Look up this endpoint's wire descriptor.
    pub const fn spec(self) -> &'static EndpointSpec {
        match self {
            SearchEndpoint::PgSearch => &PG_SEARCH,
            SearchEndpoint::DocSearch => &DOC_SEARCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pg_search_uses_key_parameter() {
        let spec = SearchEndpoint::PgSearch.spec();
        assert_eq!(spec.path, "pg-search");
        assert_eq!(spec.query_param, "key");
    }

    #[test]
    fn doc_search_uses_query_parameter() {
        let spec = SearchEndpoint::DocSearch.spec();
        assert_eq!(spec.path, "search");
        assert_eq!(spec.query_param, "query");
    }

    #[test]
    fn both_search_endpoints_are_exempt_from_auth() {
        assert!(!SearchEndpoint::PgSearch.spec().requires_auth);
        assert!(!SearchEndpoint::DocSearch.spec().requires_auth);
    }
}
