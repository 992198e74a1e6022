//! Key spaces of the capabilities cache.
//!
//! Every entity is an opaque string identifier. These enums name the sets,
//! associations, hierarchies and aggregates the store keeps for them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier spaces an association can connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Offering,
    Procedure,
    ObservableProperty,
    FeatureOfInterest,
    RelatedFeature,
    ResultTemplate,
    CompositePhenomenon,
    ObservationType,
    FeatureOfInterestType,
    DescriptionFormat,
    Role,
}

impl Domain {
    pub fn label(&self) -> &'static str {
        match self {
            Domain::Offering => "offering",
            Domain::Procedure => "procedure",
            Domain::ObservableProperty => "observable property",
            Domain::FeatureOfInterest => "feature of interest",
            Domain::RelatedFeature => "related feature",
            Domain::ResultTemplate => "result template",
            Domain::CompositePhenomenon => "composite phenomenon",
            Domain::ObservationType => "observation type",
            Domain::FeatureOfInterestType => "feature of interest type",
            Domain::DescriptionFormat => "procedure description format",
            Domain::Role => "role",
        }
    }

    /// The top-level set identifiers of this domain are expected to live in.
    ///
    /// Types, formats and roles are free vocabulary without a registry.
    pub fn registry(&self) -> Option<EntitySet> {
        match self {
            Domain::Offering => Some(EntitySet::Offerings),
            Domain::Procedure => Some(EntitySet::Procedures),
            Domain::ObservableProperty => Some(EntitySet::ObservableProperties),
            Domain::FeatureOfInterest => Some(EntitySet::FeaturesOfInterest),
            Domain::RelatedFeature => Some(EntitySet::RelatedFeatures),
            Domain::ResultTemplate => Some(EntitySet::ResultTemplates),
            Domain::CompositePhenomenon => Some(EntitySet::CompositePhenomenons),
            Domain::ObservationType
            | Domain::FeatureOfInterestType
            | Domain::DescriptionFormat
            | Domain::Role => None,
        }
    }
}

/// Top-level identifier sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntitySet {
    Offerings,
    Procedures,
    ObservableProperties,
    FeaturesOfInterest,
    ResultTemplates,
    RelatedFeatures,
    CompositePhenomenons,
    PublishedOfferings,
    PublishedProcedures,
    PublishedFeaturesOfInterest,
    PublishedObservableProperties,
    ObservationTypes,
    FeatureOfInterestTypes,
    RequestableProcedureDescriptionFormats,
}

impl EntitySet {
    pub fn label(&self) -> &'static str {
        match self {
            EntitySet::Offerings => "offering",
            EntitySet::Procedures => "procedure",
            EntitySet::ObservableProperties => "observable property",
            EntitySet::FeaturesOfInterest => "feature of interest",
            EntitySet::ResultTemplates => "result template",
            EntitySet::RelatedFeatures => "related feature",
            EntitySet::CompositePhenomenons => "composite phenomenon",
            EntitySet::PublishedOfferings => "published offering",
            EntitySet::PublishedProcedures => "published procedure",
            EntitySet::PublishedFeaturesOfInterest => "published feature of interest",
            EntitySet::PublishedObservableProperties => "published observable property",
            EntitySet::ObservationTypes => "observation type",
            EntitySet::FeatureOfInterestTypes => "feature of interest type",
            EntitySet::RequestableProcedureDescriptionFormats => {
                "requestable procedure description format"
            }
        }
    }
}

/// One direction of a many-to-many association, read as "values for key".
///
/// Each logical association is stored as two independent directions. The
/// store never derives one from the other; see [`crate::update::link`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    ObservablePropertiesForOffering,
    OfferingsForObservableProperty,
    ProceduresForOffering,
    OfferingsForProcedure,
    FeaturesOfInterestForOffering,
    OfferingsForFeatureOfInterest,
    RelatedFeaturesForOffering,
    OfferingsForRelatedFeature,
    ResultTemplatesForOffering,
    OfferingsForResultTemplate,
    CompositePhenomenonsForOffering,
    OfferingsForCompositePhenomenon,
    AllowedObservationTypesForOffering,
    OfferingsForAllowedObservationType,
    AllowedFeatureOfInterestTypesForOffering,
    OfferingsForAllowedFeatureOfInterestType,
    ObservationTypesForOffering,
    OfferingsForObservationType,
    FeatureOfInterestTypesForOffering,
    OfferingsForFeatureOfInterestType,
    HiddenChildProceduresForOffering,
    OfferingsForHiddenChildProcedure,
    ObservablePropertiesForProcedure,
    ProceduresForObservableProperty,
    FeaturesOfInterestForProcedure,
    ProceduresForFeatureOfInterest,
    CompositePhenomenonsForProcedure,
    ProceduresForCompositePhenomenon,
    DescriptionFormatsForProcedure,
    ProceduresForDescriptionFormat,
    InstancesForProcedureType,
    TypesForProcedureInstance,
    ObservablePropertiesForResultTemplate,
    ResultTemplatesForObservableProperty,
    FeaturesOfInterestForResultTemplate,
    ResultTemplatesForFeatureOfInterest,
    ObservablePropertiesForCompositePhenomenon,
    CompositePhenomenonsForObservableProperty,
    RolesForRelatedFeature,
    RelatedFeaturesForRole,
}

impl Relation {
    pub const ALL: [Relation; 40] = [
        Relation::ObservablePropertiesForOffering,
        Relation::OfferingsForObservableProperty,
        Relation::ProceduresForOffering,
        Relation::OfferingsForProcedure,
        Relation::FeaturesOfInterestForOffering,
        Relation::OfferingsForFeatureOfInterest,
        Relation::RelatedFeaturesForOffering,
        Relation::OfferingsForRelatedFeature,
        Relation::ResultTemplatesForOffering,
        Relation::OfferingsForResultTemplate,
        Relation::CompositePhenomenonsForOffering,
        Relation::OfferingsForCompositePhenomenon,
        Relation::AllowedObservationTypesForOffering,
        Relation::OfferingsForAllowedObservationType,
        Relation::AllowedFeatureOfInterestTypesForOffering,
        Relation::OfferingsForAllowedFeatureOfInterestType,
        Relation::ObservationTypesForOffering,
        Relation::OfferingsForObservationType,
        Relation::FeatureOfInterestTypesForOffering,
        Relation::OfferingsForFeatureOfInterestType,
        Relation::HiddenChildProceduresForOffering,
        Relation::OfferingsForHiddenChildProcedure,
        Relation::ObservablePropertiesForProcedure,
        Relation::ProceduresForObservableProperty,
        Relation::FeaturesOfInterestForProcedure,
        Relation::ProceduresForFeatureOfInterest,
        Relation::CompositePhenomenonsForProcedure,
        Relation::ProceduresForCompositePhenomenon,
        Relation::DescriptionFormatsForProcedure,
        Relation::ProceduresForDescriptionFormat,
        Relation::InstancesForProcedureType,
        Relation::TypesForProcedureInstance,
        Relation::ObservablePropertiesForResultTemplate,
        Relation::ResultTemplatesForObservableProperty,
        Relation::FeaturesOfInterestForResultTemplate,
        Relation::ResultTemplatesForFeatureOfInterest,
        Relation::ObservablePropertiesForCompositePhenomenon,
        Relation::CompositePhenomenonsForObservableProperty,
        Relation::RolesForRelatedFeature,
        Relation::RelatedFeaturesForRole,
    ];

    /// (key domain, value domain)
    pub fn domains(&self) -> (Domain, Domain) {
        use Domain as D;
        use Relation as R;
        match self {
            R::ObservablePropertiesForOffering => (D::Offering, D::ObservableProperty),
            R::ProceduresForOffering => (D::Offering, D::Procedure),
            R::FeaturesOfInterestForOffering => (D::Offering, D::FeatureOfInterest),
            R::RelatedFeaturesForOffering => (D::Offering, D::RelatedFeature),
            R::ResultTemplatesForOffering => (D::Offering, D::ResultTemplate),
            R::CompositePhenomenonsForOffering => (D::Offering, D::CompositePhenomenon),
            R::AllowedObservationTypesForOffering | R::ObservationTypesForOffering => {
                (D::Offering, D::ObservationType)
            }
            R::AllowedFeatureOfInterestTypesForOffering
            | R::FeatureOfInterestTypesForOffering => (D::Offering, D::FeatureOfInterestType),
            R::HiddenChildProceduresForOffering => (D::Offering, D::Procedure),
            R::ObservablePropertiesForProcedure => (D::Procedure, D::ObservableProperty),
            R::FeaturesOfInterestForProcedure => (D::Procedure, D::FeatureOfInterest),
            R::CompositePhenomenonsForProcedure => (D::Procedure, D::CompositePhenomenon),
            R::DescriptionFormatsForProcedure => (D::Procedure, D::DescriptionFormat),
            R::InstancesForProcedureType => (D::Procedure, D::Procedure),
            R::ObservablePropertiesForResultTemplate => {
                (D::ResultTemplate, D::ObservableProperty)
            }
            R::FeaturesOfInterestForResultTemplate => (D::ResultTemplate, D::FeatureOfInterest),
            R::ObservablePropertiesForCompositePhenomenon => {
                (D::CompositePhenomenon, D::ObservableProperty)
            }
            R::RolesForRelatedFeature => (D::RelatedFeature, D::Role),
            inverse => {
                let (key, value) = inverse.inverse().domains();
                (value, key)
            }
        }
    }

    /// The opposite direction of the same association.
    pub fn inverse(&self) -> Relation {
        use Relation as R;
        match self {
            R::ObservablePropertiesForOffering => R::OfferingsForObservableProperty,
            R::OfferingsForObservableProperty => R::ObservablePropertiesForOffering,
            R::ProceduresForOffering => R::OfferingsForProcedure,
            R::OfferingsForProcedure => R::ProceduresForOffering,
            R::FeaturesOfInterestForOffering => R::OfferingsForFeatureOfInterest,
            R::OfferingsForFeatureOfInterest => R::FeaturesOfInterestForOffering,
            R::RelatedFeaturesForOffering => R::OfferingsForRelatedFeature,
            R::OfferingsForRelatedFeature => R::RelatedFeaturesForOffering,
            R::ResultTemplatesForOffering => R::OfferingsForResultTemplate,
            R::OfferingsForResultTemplate => R::ResultTemplatesForOffering,
            R::CompositePhenomenonsForOffering => R::OfferingsForCompositePhenomenon,
            R::OfferingsForCompositePhenomenon => R::CompositePhenomenonsForOffering,
            R::AllowedObservationTypesForOffering => R::OfferingsForAllowedObservationType,
            R::OfferingsForAllowedObservationType => R::AllowedObservationTypesForOffering,
            R::AllowedFeatureOfInterestTypesForOffering => {
                R::OfferingsForAllowedFeatureOfInterestType
            }
            R::OfferingsForAllowedFeatureOfInterestType => {
                R::AllowedFeatureOfInterestTypesForOffering
            }
            R::ObservationTypesForOffering => R::OfferingsForObservationType,
            R::OfferingsForObservationType => R::ObservationTypesForOffering,
            R::FeatureOfInterestTypesForOffering => R::OfferingsForFeatureOfInterestType,
            R::OfferingsForFeatureOfInterestType => R::FeatureOfInterestTypesForOffering,
            R::HiddenChildProceduresForOffering => R::OfferingsForHiddenChildProcedure,
            R::OfferingsForHiddenChildProcedure => R::HiddenChildProceduresForOffering,
            R::ObservablePropertiesForProcedure => R::ProceduresForObservableProperty,
            R::ProceduresForObservableProperty => R::ObservablePropertiesForProcedure,
            R::FeaturesOfInterestForProcedure => R::ProceduresForFeatureOfInterest,
            R::ProceduresForFeatureOfInterest => R::FeaturesOfInterestForProcedure,
            R::CompositePhenomenonsForProcedure => R::ProceduresForCompositePhenomenon,
            R::ProceduresForCompositePhenomenon => R::CompositePhenomenonsForProcedure,
            R::DescriptionFormatsForProcedure => R::ProceduresForDescriptionFormat,
            R::ProceduresForDescriptionFormat => R::DescriptionFormatsForProcedure,
            R::InstancesForProcedureType => R::TypesForProcedureInstance,
            R::TypesForProcedureInstance => R::InstancesForProcedureType,
            R::ObservablePropertiesForResultTemplate => R::ResultTemplatesForObservableProperty,
            R::ResultTemplatesForObservableProperty => R::ObservablePropertiesForResultTemplate,
            R::FeaturesOfInterestForResultTemplate => R::ResultTemplatesForFeatureOfInterest,
            R::ResultTemplatesForFeatureOfInterest => R::FeaturesOfInterestForResultTemplate,
            R::ObservablePropertiesForCompositePhenomenon => {
                R::CompositePhenomenonsForObservableProperty
            }
            R::CompositePhenomenonsForObservableProperty => {
                R::ObservablePropertiesForCompositePhenomenon
            }
            R::RolesForRelatedFeature => R::RelatedFeaturesForRole,
            R::RelatedFeaturesForRole => R::RolesForRelatedFeature,
        }
    }

    pub fn key_label(&self) -> &'static str {
        self.domains().0.label()
    }

    pub fn value_label(&self) -> &'static str {
        self.domains().1.label()
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Parent/child graphs over a single identifier space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hierarchy {
    Features,
    Procedures,
    Offerings,
}

impl Hierarchy {
    pub fn label(&self) -> &'static str {
        match self {
            Hierarchy::Features => "feature of interest",
            Hierarchy::Procedures => "procedure",
            Hierarchy::Offerings => "offering",
        }
    }
}

/// Entity kinds carrying a human-readable name besides their identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    FeatureOfInterest,
    ObservableProperty,
    Procedure,
    Offering,
}

impl NameKind {
    pub fn label(&self) -> &'static str {
        match self {
            NameKind::FeatureOfInterest => "feature of interest",
            NameKind::ObservableProperty => "observable property",
            NameKind::Procedure => "procedure",
            NameKind::Offering => "offering",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeKind {
    Phenomenon,
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvelopeKind {
    Spatial,
    /// Envelope of sampling geometries (Spatial Filtering Profile).
    SpatialFilteringProfile,
}

/// What an aggregate is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    Global,
    Offering(&'a str),
    Procedure(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeInstance {
    Type,
    Instance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentAggregation {
    Component,
    Aggregation,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_inverse_is_involution() {
        for relation in Relation::ALL {
            assert_eq!(relation.inverse().inverse(), relation);
            assert_ne!(relation.inverse(), relation);
        }
    }

    #[test]
    fn test_all_relations_distinct() {
        let distinct: HashSet<_> = Relation::ALL.iter().collect();
        assert_eq!(distinct.len(), Relation::ALL.len());
    }

    #[test]
    fn test_inverse_swaps_domains() {
        for relation in Relation::ALL {
            let (key, value) = relation.domains();
            assert_eq!(relation.inverse().domains(), (value, key));
        }
        assert_eq!(
            Relation::OfferingsForObservableProperty.key_label(),
            "observable property"
        );
    }
}
