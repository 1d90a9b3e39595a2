pub mod provider;
pub mod supabase_repo;
