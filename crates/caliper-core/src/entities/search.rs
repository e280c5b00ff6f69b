use caliper_canonical::Timestamp;
use serde_json::{Map, Value};

use super::Link;

shape! {
    /// Attributes of a search query. The creator is a reference.
    pub struct QueryProps {
        creator: Option<Link> = "creator", reference;
        search_target: Option<Link> = "searchTarget";
        search_terms: Option<String> = "searchTerms";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        extensions: Map<String, Value> = "extensions";
    }
}

shape! {
    /// Attributes of a search response.
    pub struct SearchResponseProps {
        search_provider: Option<Link> = "searchProvider";
        search_target: Option<Link> = "searchTarget";
        query: Option<Link> = "query";
        search_results_item_count: Option<u64> = "searchResultsItemCount";
        search_results: Vec<Link> = "searchResults";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        extensions: Map<String, Value> = "extensions";
    }
}
