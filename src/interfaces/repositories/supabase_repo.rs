use crate::db::supabase::SupabaseClient;

#[derive(Clone)]
pub struct SupabaseProviderRepo {
    pub client: SupabaseClient,
}
