//! [`Form`] collecting [`PropertyAttributes`] from the user.

use std::str::FromStr;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use derive_more::{Display, Error as StdError};
use service::domain::PropertyAttributes;
use tracerr::Traced;

use crate::{define_error, AsError};

/// Value of a single [`PropertyAttributes`] field set explicitly.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
#[display("{field}={value}")]
pub struct Override {
    /// Name of the overridden field.
    pub field: String,

    /// Raw value of the overridden field.
    pub value: String,
}

impl FromStr for Override {
    type Err = ParseOverrideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, value) = s.split_once('=').ok_or(ParseOverrideError)?;
        let field = field.trim();
        if field.is_empty() {
            return Err(ParseOverrideError);
        }
        Ok(Self {
            field: field.to_owned(),
            value: value.trim().to_owned(),
        })
    }
}

/// Error of parsing an [`Override`].
#[derive(Clone, Copy, Debug, Display, StdError)]
#[display("expected `FIELD=VALUE`")]
pub struct ParseOverrideError;

/// Source of [`PropertyAttributes`], merged in the following order:
/// - default values (the ones of an average family home);
/// - the file at the [`Form::path`] (if any);
/// - `ADILEV_PROPERTY_*` environment variables (if any);
/// - [`Form::overrides`].
#[derive(Clone, Debug, Default)]
pub struct Form {
    /// Path to the file describing the property.
    pub path: Option<String>,

    /// [`Override`]s of the [`PropertyAttributes`] fields.
    pub overrides: Vec<Override>,
}

impl Form {
    /// Prefix of the environment variables setting [`PropertyAttributes`].
    pub const ENV_PREFIX: &'static str = "ADILEV_PROPERTY";

    /// Submits this [`Form`] producing the described [`PropertyAttributes`].
    ///
    /// # Errors
    ///
    /// See [`Error`] for details.
    #[tracing::instrument(
        skip_all,
        fields(path = ?self.path, overrides = self.overrides.len()),
    )]
    pub fn submit(&self) -> Result<PropertyAttributes, Traced<Error>> {
        self.submit_with(config::Environment::with_prefix(Self::ENV_PREFIX))
    }

    /// Submits this [`Form`] reading environment variables from the provided
    /// [`config::Environment`].
    fn submit_with(
        &self,
        env: config::Environment,
    ) -> Result<PropertyAttributes, Traced<Error>> {
        let mut builder = ConfigBuilder::<DefaultState>::default();
        if let Some(path) = &self.path {
            builder = builder.add_source(config::File::with_name(path));
        }
        builder = builder.add_source(env.try_parsing(true));
        for Override { field, value } in &self.overrides {
            tracing::debug!(%field, %value, "overriding attribute");
            builder = builder
                .set_override(field.as_str(), value.as_str())
                .map_err(Error::Override)
                .map_err(tracerr::wrap!())?;
        }

        builder
            .build()
            .map_err(Error::Source)
            .map_err(tracerr::wrap!())?
            .try_deserialize()
            .map_err(Error::Shape)
            .map_err(tracerr::wrap!())
    }
}

/// Error of [`Form::submit()`].
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// [`Override`] cannot be applied.
    #[display("Failed to apply attribute override: {_0}")]
    Override(ConfigError),

    /// Property file cannot be read or parsed.
    #[display("Failed to read property attributes: {_0}")]
    Source(ConfigError),

    /// Collected attributes don't describe a property.
    #[display("Invalid property attributes: {_0}")]
    Shape(ConfigError),
}

impl AsError for Error {
    fn try_as_error(&self) -> Option<crate::Error> {
        define_error! {
            enum FormError {
                #[code = "INVALID_OVERRIDE"]
                #[exit = 2]
                #[message = "Attribute override cannot be applied"]
                InvalidOverride,

                #[code = "UNREADABLE_PROPERTY"]
                #[exit = 66]
                #[message = "Property file cannot be read"]
                UnreadableProperty,

                #[code = "INVALID_PROPERTY"]
                #[exit = 65]
                #[message = "Property attributes are invalid"]
                InvalidProperty,
            }
        }

        let (kind, cause) = match self {
            Self::Override(e) => (FormError::InvalidOverride, e),
            Self::Source(e) => (FormError::UnreadableProperty, e),
            Self::Shape(e) => (FormError::InvalidProperty, e),
        };
        Some(crate::Error::from(kind).caused_by(cause))
    }
}

#[cfg(test)]
mod spec {
    use std::{fs, path::PathBuf, process};

    use rust_decimal::Decimal;
    use service::domain::{
        property::{Area, Distance, Heating, Quantity, SeaView},
        LuxuryTier, PropertyAttributes,
    };

    use crate::AsError as _;

    use super::{Form, Override};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    /// Writes the provided `contents` into a uniquely named temporary file.
    fn property_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir()
            .join(format!("adilev-{}-{name}", process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        config::Environment::with_prefix(Form::ENV_PREFIX).source(Some(
            vars.iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        ))
    }

    fn form(overrides: &[&str]) -> Form {
        Form {
            path: None,
            overrides: overrides.iter().map(|o| o.parse().unwrap()).collect(),
        }
    }

    #[test]
    fn parses_override() {
        let o: Override = " sea_view = full ".parse().unwrap();

        assert_eq!(o.field, "sea_view");
        assert_eq!(o.value, "full");
        assert_eq!(o.to_string(), "sea_view=full");

        let o: Override = "facade=".parse().unwrap();
        assert_eq!(o.value, "");
    }

    #[test]
    fn rejects_malformed_override() {
        assert!("net_area".parse::<Override>().is_err());
        assert!("=120".parse::<Override>().is_err());
    }

    #[test]
    fn defaults_to_average_family_home() {
        let attrs = form(&[]).submit().unwrap();

        assert_eq!(attrs, PropertyAttributes::default());
    }

    #[test]
    fn applies_overrides() {
        let attrs = form(&[
            "luxury_tier=premium",
            "distance_to_sea=0.3",
            "sea_view=full",
            "heating=none",
            "is_neighborhood_safe=false",
        ])
        .submit()
        .unwrap();

        assert_eq!(attrs.luxury_tier, LuxuryTier::Premium);
        assert_eq!(attrs.distance_to_sea, Distance::from(decimal("0.3")));
        assert_eq!(attrs.sea_view, SeaView::Full);
        assert_eq!(attrs.heating, Heating::None);
        assert!(!attrs.is_neighborhood_safe);
        assert_eq!(attrs.rooms, PropertyAttributes::default().rooms);
    }

    #[test]
    fn parses_variants_ignoring_case() {
        let attrs = form(&["luxury_tier=Premium", "floor_type=HIGH-ENTRANCE"])
            .submit_with(env(&[]))
            .unwrap();

        assert_eq!(attrs.luxury_tier, LuxuryTier::Premium);
        assert_eq!(attrs.floor_type.to_string(), "high-entrance");
    }

    #[test]
    fn reads_property_file() {
        let path = property_file(
            "ultra.toml",
            "luxury_tier = \"ultra\"\n\
             net_area = 150\n\
             distance_to_sea = 0.3\n\
             sea_view = \"panoramic\"\n\
             has_parking = false\n",
        );
        let result = Form {
            path: Some(path.to_str().unwrap().to_owned()),
            overrides: vec![],
        }
        .submit_with(env(&[]));
        _ = fs::remove_file(&path);
        let attrs = result.unwrap();

        assert_eq!(attrs.luxury_tier, LuxuryTier::Ultra);
        assert_eq!(attrs.net_area, Area::from(decimal("150")));
        assert_eq!(attrs.distance_to_sea, Distance::from(decimal("0.3")));
        assert_eq!(attrs.sea_view, SeaView::Panoramic);
        assert!(!attrs.has_parking);
        assert_eq!(attrs.rooms, PropertyAttributes::default().rooms);
    }

    #[test]
    fn layers_file_env_and_overrides() {
        let path = property_file(
            "layers.json",
            r#"{"net_area": 150, "distance_to_metro": 1.5, "rooms": 4}"#,
        );
        let result = Form {
            path: Some(path.to_str().unwrap().to_owned()),
            overrides: vec!["rooms=6".parse().unwrap()],
        }
        .submit_with(env(&[
            ("ADILEV_PROPERTY_DISTANCE_TO_METRO", "2.5"),
            ("ADILEV_PROPERTY_ROOMS", "5"),
            ("ADILEV_PROPERTY_HEATING", "central"),
            ("PROPERTY_MANAGER", "someone"),
        ]));
        _ = fs::remove_file(&path);
        let attrs = result.unwrap();

        assert_eq!(attrs.net_area, Area::from(decimal("150")));
        assert_eq!(attrs.distance_to_metro, Distance::from(decimal("2.5")));
        assert_eq!(attrs.heating, Heating::Central);
        assert_eq!(attrs.rooms, Quantity::from(decimal("6")));
    }

    #[test]
    fn rejects_unknown_field() {
        let err = form(&["swimming_pool=true"]).submit().unwrap_err();

        let err = err.into_error();
        assert_eq!(err.code, "INVALID_PROPERTY");
        assert_eq!(err.exit_code, 65);
        assert!(err.backtrace.is_some());
    }

    #[test]
    fn rejects_unknown_variant() {
        let err = form(&["sea_view=ocean"]).submit().unwrap_err();

        assert_eq!(err.into_error().code, "INVALID_PROPERTY");
    }

    #[test]
    fn fails_on_missing_file() {
        let err = Form {
            path: Some("definitely/missing/property.toml".into()),
            overrides: vec![],
        }
        .submit()
        .unwrap_err();

        let err = err.into_error();
        assert_eq!(err.code, "UNREADABLE_PROPERTY");
        assert_eq!(err.exit_code, 66);
    }
}
