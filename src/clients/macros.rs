/// Generates the read-only `list_*s` accessor shared by every store client.
#[macro_export]
macro_rules! impl_store_list {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident) => {
        paste::paste! {
            impl $client_name {
                /// Snapshot of the store, most-recently-added first.
                #[tracing::instrument(skip(self))]
                pub async fn [<list_ $entity_name_snake s>](&self) -> Result<Vec<$entity>, $error> {
                    tracing::debug!("Sending request");
                    self.inner
                        .list()
                        .await
                        .map_err(|e| <$error>::ActorCommunicationError(e.to_string()))
                }
            }
        }
    };
}
