use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::lenient;

/// TTL substituted when a record set has none, or a non-positive one.
pub const DEFAULT_TTL: u32 = 300;

/// Record type tag of a record set
///
/// Types the converter treats specially get their own variant; everything
/// else passes through untouched as [`RecordType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordType {
    /// IPv4 address
    A,
    /// IPv6 address
    Aaaa,
    /// Canonical name
    Cname,
    /// Mail exchange
    Mx,
    /// Text
    Txt,
    /// Sender policy framework (legacy type, quoted like TXT)
    Spf,
    /// Name server
    Ns,
    /// Start of authority
    Soa,
    /// Any other type, kept verbatim (SRV, CAA, PTR, DS, ...)
    Other(String),
}

impl RecordType {
    /// The tag as written in the zonefile
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Spf => "SPF",
            Self::Ns => "NS",
            Self::Soa => "SOA",
            Self::Other(tag) => tag,
        }
    }

    /// Returns true for types whose values are quoted character strings
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Txt | Self::Spf)
    }
}

impl From<&str> for RecordType {
    fn from(tag: &str) -> Self {
        match tag {
            "A" => Self::A,
            "AAAA" => Self::Aaaa,
            "CNAME" => Self::Cname,
            "MX" => Self::Mx,
            "TXT" => Self::Txt,
            "SPF" => Self::Spf,
            "NS" => Self::Ns,
            "SOA" => Self::Soa,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for RecordType {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<RecordType> for String {
    fn from(tag: RecordType) -> Self {
        match tag {
            RecordType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value of a record set (`{"Value": "..."}`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceRecord {
    /// Raw value in the record type's presentation format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Provider alias pointer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasTarget {
    /// Name the alias resolves to
    #[serde(
        default,
        rename = "DNSName",
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub dns_name: Option<String>,

    /// Hosted zone of the target
    #[serde(
        default,
        rename = "HostedZoneId",
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub hosted_zone_id: Option<String>,

    /// Whether the provider health-checks the target
    #[serde(
        default,
        rename = "EvaluateTargetHealth",
        deserialize_with = "lenient::flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub evaluate_target_health: Option<bool>,
}

impl AliasTarget {
    /// Target name, or empty if absent
    #[must_use]
    pub fn target(&self) -> &str {
        self.dns_name.as_deref().unwrap_or_default()
    }

    /// Hosted zone id, or empty if absent
    #[must_use]
    pub fn zone_id(&self) -> &str {
        self.hosted_zone_id.as_deref().unwrap_or_default()
    }
}

/// Routing-policy attributes of a record set
///
/// Carried through as opaque annotation data, never interpreted. Only
/// values that are actually set are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoutingMeta {
    /// Distinguishes record sets sharing a name and type
    #[serde(default, deserialize_with = "lenient::truthy", skip_serializing_if = "Option::is_none")]
    pub set_identifier: Option<Value>,

    /// Weighted routing weight
    #[serde(default, deserialize_with = "lenient::truthy", skip_serializing_if = "Option::is_none")]
    pub weight: Option<Value>,

    /// Latency routing region
    #[serde(default, deserialize_with = "lenient::truthy", skip_serializing_if = "Option::is_none")]
    pub region: Option<Value>,

    /// Failover role (PRIMARY/SECONDARY)
    #[serde(default, deserialize_with = "lenient::truthy", skip_serializing_if = "Option::is_none")]
    pub failover: Option<Value>,

    /// Associated health check
    #[serde(default, deserialize_with = "lenient::truthy", skip_serializing_if = "Option::is_none")]
    pub health_check_id: Option<Value>,

    /// Geolocation routing descriptor
    #[serde(default, deserialize_with = "lenient::truthy", skip_serializing_if = "Option::is_none")]
    pub geo_location: Option<Value>,
}

impl RoutingMeta {
    /// Returns true if no routing attribute is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.set_identifier.is_none()
            && self.weight.is_none()
            && self.region.is_none()
            && self.failover.is_none()
            && self.health_check_id.is_none()
            && self.geo_location.is_none()
    }

    /// Labeled attributes in annotation order
    ///
    /// Scalars render bare; the geo descriptor is always rendered as
    /// compact JSON.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let scalars = [
            ("SetIdentifier", &self.set_identifier),
            ("Weight", &self.weight),
            ("Region", &self.region),
            ("Failover", &self.failover),
            ("HealthCheckId", &self.health_check_id),
        ];
        let mut entries: Vec<(&'static str, String)> = scalars
            .into_iter()
            .filter_map(|(label, value)| value.as_ref().map(|v| (label, scalar_text(v))))
            .collect();
        if let Some(geo) = &self.geo_location {
            entries.push(("Geo", geo.to_string()));
        }
        entries
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// One record set from a hosted-zone export
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecordSet {
    /// Owner name, usually fully qualified
    #[serde(
        default,
        rename = "Name",
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    /// Record type tag
    #[serde(
        default,
        rename = "Type",
        deserialize_with = "lenient::record_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub record_type: Option<RecordType>,

    /// TTL in seconds as exported; see [`ResourceRecordSet::effective_ttl`]
    #[serde(
        default,
        rename = "TTL",
        deserialize_with = "lenient::ttl",
        skip_serializing_if = "Option::is_none"
    )]
    pub ttl: Option<i64>,

    /// Direct values
    #[serde(
        default,
        rename = "ResourceRecords",
        deserialize_with = "lenient::records",
        skip_serializing_if = "Option::is_none"
    )]
    pub resource_records: Option<Vec<ResourceRecord>>,

    /// Alias pointer, in place of values
    #[serde(
        default,
        rename = "AliasTarget",
        deserialize_with = "lenient::alias",
        skip_serializing_if = "Option::is_none"
    )]
    pub alias_target: Option<AliasTarget>,

    /// Reusable delegation set (NS record sets only)
    #[serde(
        default,
        rename = "DelegationSetId",
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub delegation_set_id: Option<String>,

    /// Routing-policy attributes
    #[serde(flatten)]
    pub routing: RoutingMeta,
}

impl ResourceRecordSet {
    /// Create a record set with a name, type and values
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, record_type: impl Into<RecordType>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: Some(name.into()),
            record_type: Some(record_type.into()),
            resource_records: Some(
                values
                    .into_iter()
                    .map(|v| ResourceRecord {
                        value: Some(v.into()),
                    })
                    .collect(),
            ),
            ..Self::default()
        }
    }

    /// Create an alias record set
    #[must_use]
    pub fn alias(
        name: impl Into<String>,
        record_type: impl Into<RecordType>,
        target: impl Into<String>,
        hosted_zone_id: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            record_type: Some(record_type.into()),
            alias_target: Some(AliasTarget {
                dns_name: Some(target.into()),
                hosted_zone_id: Some(hosted_zone_id.into()),
                evaluate_target_health: None,
            }),
            ..Self::default()
        }
    }

    /// Set the TTL
    #[must_use]
    pub fn with_ttl(mut self, ttl: i64) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Set the routing attributes
    #[must_use]
    pub fn with_routing(mut self, routing: RoutingMeta) -> Self {
        self.routing = routing;
        self
    }

    /// Owner name, or empty if absent
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Type tag as written in the export, or empty if absent
    #[must_use]
    pub fn type_tag(&self) -> &str {
        self.record_type.as_ref().map_or("", RecordType::as_str)
    }

    /// Returns true if the record set has the given type
    #[must_use]
    pub fn is_type(&self, record_type: &RecordType) -> bool {
        self.record_type.as_ref() == Some(record_type)
    }

    /// TTL to emit: the exported TTL when positive, otherwise `default`
    #[must_use]
    pub fn effective_ttl(&self, default: u32) -> u64 {
        self.ttl
            .and_then(|ttl| u64::try_from(ttl).ok())
            .filter(|ttl| *ttl > 0)
            .unwrap_or_else(|| u64::from(default))
    }

    /// Values in order, with missing values as empty strings
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.resource_records
            .iter()
            .flatten()
            .map(|r| r.value.as_deref().unwrap_or_default())
    }

    /// Number of direct values
    #[must_use]
    pub fn value_count(&self) -> usize {
        self.resource_records.as_ref().map_or(0, Vec::len)
    }

    /// Returns true if there is at least one direct value
    #[must_use]
    pub fn has_values(&self) -> bool {
        self.value_count() > 0
    }
}
