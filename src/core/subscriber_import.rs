use crate::domain::messages::{ProfilesRequest, SubscriberFieldRequest, SubscriberImportRequest};
use crate::domain::model::{Field, ProfileType, Subscriber};
use crate::domain::ports::EmsService;
use crate::utils::error::Result;
use serde::Serialize;
use uuid::Uuid;

pub const DUPLICATE_CRITERIA: &str = "email";

/// Subscribers of the demo import.
pub const SAMPLE_SUBSCRIBERS: &[(&str, &str, &str)] = &[
    ("max.mustermann@example.com", "Max", "Mustermann"),
    ("erika.musterfrau@example.com", "Erika", "Musterfrau"),
    ("john.doe@example.com", "John", "Doe"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportedSubscribers {
    pub profile_id: Uuid,
    pub subscriber_ids: Vec<Uuid>,
}

impl ImportedSubscribers {
    pub fn is_empty(&self) -> bool {
        self.subscriber_ids.is_empty()
    }
}

/// Builds the sample subscribers with the fields known to the account.
///
/// Field names are taken from the account, so `FirstName` is sent as the
/// account spells it. `email` is always set, it is the duplicate criterion of
/// the import.
pub fn sample_subscribers(known_fields: Option<&[Field]>) -> Vec<Subscriber> {
    let resolve = |name: &str| -> Option<String> {
        let Some(fields) = known_fields else {
            return Some(name.to_string());
        };
        match fields
            .iter()
            .find(|field| field.internal_name.eq_ignore_ascii_case(name))
        {
            Some(field) => Some(field.internal_name.clone()),
            None if name == DUPLICATE_CRITERIA => Some(name.to_string()),
            None => None,
        }
    };

    SAMPLE_SUBSCRIBERS
        .iter()
        .map(|(email, first_name, last_name)| Subscriber {
            fields: [("email", *email), ("firstname", *first_name), ("lastname", *last_name)]
                .into_iter()
                .filter_map(|(name, value)| {
                    resolve(name).map(|internal_name| Field::text(&internal_name, value))
                })
                .collect(),
        })
        .collect()
}

/// Imports the sample subscribers into a static profile.
pub struct SubscriberImport<'a, E: EmsService> {
    service: &'a E,
}

impl<'a, E: EmsService> SubscriberImport<'a, E> {
    pub fn new(service: &'a E) -> Self {
        Self { service }
    }

    /// Unknown profile names give an empty result with the nil profile id.
    pub async fn import_subscribers(&self, profile_name: &str) -> Result<ImportedSubscribers> {
        let Some(profile_id) = self.find_profile(profile_name).await? else {
            tracing::warn!("⚠️ Static profile '{}' not found", profile_name);
            return Ok(ImportedSubscribers::default());
        };

        let known_fields = self
            .service
            .get_subscriber_fields(SubscriberFieldRequest)
            .await?
            .map(|response| response.fields);

        if let Some(fields) = &known_fields {
            tracing::debug!(
                "Subscriber fields: {}",
                fields
                    .iter()
                    .map(|f| format!("{} ({})", f.internal_name, f.kind.type_name()))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        let subscribers = sample_subscribers(known_fields.as_deref());
        tracing::info!(
            "👥 Importing {} subscribers into profile {}",
            subscribers.len(),
            profile_id
        );

        let response = self
            .service
            .import_subscribers(SubscriberImportRequest {
                profile_guid: profile_id,
                duplicate_criteria: DUPLICATE_CRITERIA.to_string(),
                subscribers,
            })
            .await?;

        let Some(response) = response else {
            return Ok(ImportedSubscribers {
                profile_id,
                subscriber_ids: Vec::new(),
            });
        };

        tracing::info!(
            "👥 Imported: {}, updated: {}, errors: {}",
            response.imported,
            response.updated,
            response.errors
        );
        if let Some(message) = &response.first_error_message {
            tracing::warn!("⚠️ First import error: {}", message);
        }

        Ok(ImportedSubscribers {
            profile_id,
            subscriber_ids: response.imported_subscribers,
        })
    }

    async fn find_profile(&self, profile_name: &str) -> Result<Option<Uuid>> {
        let response = self
            .service
            .get_profiles(ProfilesRequest {
                profile_type: ProfileType::Static,
            })
            .await?;

        Ok(response.and_then(|response| {
            response
                .profiles
                .into_iter()
                .find(|profile| profile.name.to_lowercase() == profile_name.to_lowercase())
                .map(|profile| profile.guid)
        }))
    }
}
