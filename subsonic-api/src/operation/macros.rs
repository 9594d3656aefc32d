//! Declarative macros for operation definitions
//!
//! getAlbumList and getAlbumList2 share their request shape and validation
//! rules and differ only in endpoint and response section. The macro below
//! stamps out one independent operation per endpoint.

/// Define an album list operation
///
/// Generates `<Name>Request`, `<Name>Operation`, a `Validate` impl applying
/// the album list rules, the `SubsonicOperation` impl and a snake_case
/// request constructor.
///
/// # Example
/// ```rust,ignore
/// define_album_list_operation! {
///     operation: GetAlbumList,
///     endpoint: AlbumList,
///     section: album_list,
/// }
/// ```
#[macro_export]
macro_rules! define_album_list_operation {
    (
        operation: $op:ident,
        endpoint: $endpoint:ident,
        section: $section:ident $(,)?
    ) => {
        paste! {
            /// Album list request
            #[derive(Clone, Debug, PartialEq, Eq)]
            pub struct [<$op Request>] {
                /// Album list ordering, one of the `ListType` wire tags
                pub list_type: String,
                /// Optional parameters: size, offset, fromYear, toYear, genre, musicFolderId
                pub parameters: Option<$crate::Parameters>,
            }

            impl $crate::operation::Validate for [<$op Request>] {
                fn validate(&self) -> Result<(), $crate::operation::ValidationError> {
                    $crate::operation::validate_album_list(
                        $crate::Endpoint::$endpoint,
                        &self.list_type,
                        self.parameters.as_ref(),
                    )
                    .map(|_| ())
                }
            }

            pub struct [<$op Operation>];

            impl $crate::operation::SubsonicOperation for [<$op Operation>] {
                type Request = [<$op Request>];
                type Response = Vec<$crate::Album>;

                const ENDPOINT: $crate::Endpoint = $crate::Endpoint::$endpoint;

                fn build_parameters(
                    request: &Self::Request,
                ) -> Result<Option<$crate::Parameters>, $crate::operation::ValidationError> {
                    use $crate::operation::Validate;
                    request.validate()?;
                    Ok(Some($crate::params::merge_forced(
                        $crate::params::keys::TYPE,
                        &request.list_type,
                        request.parameters.as_ref(),
                    )))
                }

                fn extract(response: $crate::Response) -> Self::Response {
                    response.$section.albums
                }
            }

            /// Build a request; nothing is validated until it is executed
            pub fn [<$op:snake>](
                list_type: impl Into<String>,
                parameters: Option<&$crate::Parameters>,
            ) -> [<$op Request>] {
                [<$op Request>] {
                    list_type: list_type.into(),
                    parameters: parameters.cloned(),
                }
            }
        }
    };
}
