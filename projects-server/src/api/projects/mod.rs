pub mod projects;
pub mod search_query;
