//! Zone text generator: converts record sets into zonefile lines.
//!
//! Every record set maps to a [`RecordOutcome`]. Nothing a single record
//! set contains can fail the conversion: unusable record sets turn into
//! comments, so the generator is total over arbitrary input.
//!
//! Policy per record set, checked in order:
//!
//! 1. `SOA` is only ever written as an audit comment.
//! 2. `NS` is only ever written as audit comments.
//! 3. An alias target becomes a comment, plus a `CNAME` below the apex. The
//!    apex gets a note to recreate it by hand instead.
//! 4. Direct values become active lines, one per value.
//! 5. Anything else is marked as skipped.

use r53zone_core::{fqdn, Diagnostic, RecordType, ResourceRecordSet, Zone};
use tracing::{debug, warn};

use crate::config::GeneratorOptions;
use crate::conversion::{Conversion, OriginSource};
use crate::meta::routing_annotation;
use crate::stats::ConversionStats;
use crate::txt::quote_txt;

/// Closing advisory comment.
pub const FOOTER: &str =
    ";; End of export. Please verify TXT, DKIM, MX and Alias records before importing.";

/// Result of rendering one record set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// At least one active record line, possibly with comments around it
    Emitted {
        /// Output lines in order
        lines: Vec<String>,
        /// How many of `lines` are active records
        active: usize,
    },
    /// Preserved for audit as comments only
    CommentOnly {
        /// Output lines in order
        lines: Vec<String>,
    },
    /// Nothing usable; a single skip marker
    Skipped {
        /// The skip comment
        line: String,
    },
}

impl RecordOutcome {
    /// All output lines of this record set
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        let lines: &[String] = match self {
            Self::Emitted { lines, .. } | Self::CommentOnly { lines } => lines,
            Self::Skipped { line } => std::slice::from_ref(line),
        };
        lines.iter().map(String::as_str)
    }

    /// Number of active (non-comment) lines
    #[must_use]
    pub const fn active_lines(&self) -> usize {
        match self {
            Self::Emitted { active, .. } => *active,
            Self::CommentOnly { .. } | Self::Skipped { .. } => 0,
        }
    }
}

/// Split an MX value into preference and exchange.
///
/// Matches `<digits><whitespace><rest>`; the exchange is the remaining
/// whitespace-separated tokens joined by single spaces.
#[must_use]
pub fn parse_mx(value: &str) -> Option<(&str, String)> {
    let digits = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    if digits == 0 {
        return None;
    }
    let (preference, rest) = value.split_at(digits);
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let exchange: Vec<&str> = rest.split_whitespace().collect();
    if exchange.is_empty() {
        return None;
    }
    Some((preference, exchange.join(" ")))
}

/// Renders a [`Zone`] as zonefile text
#[derive(Debug, Clone, Copy)]
pub struct ZoneGenerator<'a> {
    options: &'a GeneratorOptions,
}

impl<'a> ZoneGenerator<'a> {
    /// Create a generator with the given options
    #[must_use]
    pub const fn new(options: &'a GeneratorOptions) -> Self {
        Self { options }
    }

    /// Header lines: `$ORIGIN`, the advisory comments and a blank line
    #[must_use]
    pub fn header(&self, zone: &Zone) -> Vec<String> {
        let provider = &self.options.target_provider;
        vec![
            format!("$ORIGIN {}", zone.origin()),
            format!(
                ";; Exported from Route 53 JSON. Manual review required before import into {provider}"
            ),
            format!(
                ";; SOA/NS are commented out below for auditing. Remove or keep commented when importing to {provider}."
            ),
            String::new(),
        ]
    }

    /// Generate the full zonefile for a zone
    #[must_use]
    pub fn generate(&self, zone: &Zone) -> Conversion {
        let mut out = self.header(zone);
        let mut stats = ConversionStats::default();
        let mut diagnostics = vec![Diagnostic::note(
            "Zonefile generated. Inspect carefully (TXT, aliases and health/failover entries may need manual work).",
        )];

        for (index, rrset) in zone.records().iter().enumerate() {
            debug!(
                index,
                owner = rrset.name(),
                record_type = rrset.type_tag(),
                "rendering record set"
            );
            let outcome = self.render_record(zone, rrset);
            stats.tally(&outcome);
            out.extend(outcome.lines().map(str::to_string));
            diagnostics.extend(self.review_record(zone, index, rrset));
        }

        out.push(String::new());
        out.push(FOOTER.to_string());

        Conversion {
            origin: zone.origin().to_string(),
            origin_source: OriginSource::Supplied,
            text: out.join("\n"),
            diagnostics,
            stats,
        }
    }

    /// Render one record set
    #[must_use]
    pub fn render_record(&self, zone: &Zone, rrset: &ResourceRecordSet) -> RecordOutcome {
        let name = zone.render_name(rrset.name());
        let ttl = rrset.effective_ttl(self.options.default_ttl);
        let meta = routing_annotation(&rrset.routing);

        match rrset.record_type.as_ref() {
            Some(RecordType::Soa) => {
                let value = rrset.values().next().unwrap_or_default();
                return RecordOutcome::CommentOnly {
                    lines: vec![comment(format!("; SOA {name} {ttl} IN SOA {value}"))],
                };
            }
            Some(RecordType::Ns) => {
                let lines = if rrset.has_values() {
                    rrset
                        .values()
                        .map(|value| comment(format!("; NS {name} {ttl} IN NS {value}")))
                        .collect()
                } else if let Some(id) = &rrset.delegation_set_id {
                    vec![format!("; NS {name} (DelegationSetId: {id})")]
                } else {
                    vec![format!("; NS {name} (no ResourceRecords)")]
                };
                return RecordOutcome::CommentOnly { lines };
            }
            _ => {}
        }

        if let Some(alias) = &rrset.alias_target {
            let described = comment(format!(
                "; ALIAS {name} -> {} (HostedZoneId:{}) {meta}",
                alias.target(),
                alias.zone_id()
            ));
            if zone.is_apex(rrset.name()) {
                return RecordOutcome::CommentOnly {
                    lines: vec![
                        described,
                        format!(
                            "; NOTE: Apex ALIAS present for {}; recreate using CNAME flattening or A records in your DNS provider.",
                            zone.origin()
                        ),
                    ],
                };
            }
            let target = fqdn::ensure_fqdn(alias.target());
            return RecordOutcome::Emitted {
                lines: vec![described, format!("{name}\t{ttl}\tIN\tCNAME\t{target}")],
                active: 1,
            };
        }

        if rrset.has_values() {
            let tag = rrset.type_tag();
            let mut lines: Vec<String> = rrset
                .values()
                .map(|value| {
                    let rdata = render_value(rrset.record_type.as_ref(), value);
                    format!("{name}\t{ttl}\tIN\t{tag}\t{rdata}")
                })
                .collect();
            let active = lines.len();
            if !meta.is_empty() {
                lines.push(meta);
            }
            return RecordOutcome::Emitted { lines, active };
        }

        let parts = [
            "; SKIPPED",
            name,
            rrset.type_tag(),
            "(no ResourceRecords, no AliasTarget)",
            meta.as_str(),
        ];
        RecordOutcome::Skipped {
            line: parts
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Advisory diagnostics for one record set
    #[must_use]
    pub fn review_record(
        &self,
        zone: &Zone,
        index: usize,
        rrset: &ResourceRecordSet,
    ) -> Vec<Diagnostic> {
        let name = rrset.name();
        let mut found = Vec::new();

        let audit_only =
            rrset.is_type(&RecordType::Soa) || rrset.is_type(&RecordType::Ns);

        if !audit_only {
            if let Some(alias) = &rrset.alias_target {
                if rrset.has_values() {
                    warn!(owner = name, "record set has both an alias target and values; values ignored");
                    found.push(Diagnostic::warning(
                        "alias target and direct values are both present; the values were ignored",
                    ));
                }
                if zone.is_apex(name) {
                    found.push(Diagnostic::warning(
                        "apex alias cannot be expressed in a zonefile; recreate it with CNAME flattening or A/AAAA records",
                    ));
                } else if alias.target().is_empty() {
                    found.push(Diagnostic::warning(
                        "alias has no target name; the emitted CNAME is incomplete",
                    ));
                } else {
                    found.push(Diagnostic::note(format!(
                        "alias to {} converted to CNAME; a CNAME cannot coexist with other records at this name",
                        alias.target()
                    )));
                }
            } else if rrset.has_values() {
                if rrset.is_type(&RecordType::Mx) {
                    for value in rrset.values().filter(|v| parse_mx(v).is_none()) {
                        found.push(Diagnostic::note(format!(
                            "MX value '{value}' is not '<preference> <exchange>'; written as a plain name"
                        )));
                    }
                }
            } else {
                warn!(owner = name, record_type = rrset.type_tag(), "skipping record set without values or alias target");
                found.push(Diagnostic::warning(
                    "record set has neither values nor an alias target; skipped",
                ));
            }
        }

        if !rrset.routing.is_empty() {
            found.push(Diagnostic::note(
                "routing policy metadata (weight/region/failover/health check/geo) kept as a comment only",
            ));
        }

        found
            .into_iter()
            .map(|d| d.for_record(index, name))
            .collect()
    }
}

/// Per-type rdata transform for a direct value.
fn render_value(record_type: Option<&RecordType>, value: &str) -> String {
    match record_type {
        Some(t) if t.is_text() => quote_txt(value),
        Some(RecordType::Mx) => match parse_mx(value) {
            Some((preference, exchange)) => {
                format!("{preference} {}", fqdn::ensure_fqdn(&exchange))
            }
            None => fqdn::ensure_fqdn(value).into_owned(),
        },
        Some(RecordType::Cname | RecordType::Ns) => fqdn::ensure_fqdn(value).into_owned(),
        _ => value.to_string(),
    }
}

/// Comment lines never end in whitespace left by empty fields.
fn comment(mut line: String) -> String {
    let len = line.trim_end().len();
    line.truncate(len);
    line
}

/// Generate zonefile text for `records` under `origin`.
///
/// Fails only when `origin` is blank.
pub fn generate_zone_text(
    origin: &str,
    records: Vec<ResourceRecordSet>,
    options: &GeneratorOptions,
) -> r53zone_core::Result<Conversion> {
    let zone = Zone::new(origin, records)?;
    Ok(ZoneGenerator::new(options).generate(&zone))
}

#[cfg(test)]
mod tests {
    use super::*;
    use r53zone_core::{RoutingMeta, ZoneError};
    use serde_json::json;

    fn zone(records: Vec<ResourceRecordSet>) -> Zone {
        Zone::new("example.com", records).unwrap()
    }

    fn render(rrset: &ResourceRecordSet) -> RecordOutcome {
        let options = GeneratorOptions::default();
        let zone = zone(Vec::new());
        ZoneGenerator::new(&options).render_record(&zone, rrset)
    }

    fn body(text: &str) -> Vec<&str> {
        let lines: Vec<&str> = text.lines().collect();
        lines[4..lines.len() - 2].to_vec()
    }

    #[test]
    fn test_apex_a_record() {
        let rrset = ResourceRecordSet::new("example.com.", "A", ["1.2.3.4"]).with_ttl(300);
        let conversion = generate_zone_text("example.com", vec![rrset], &GeneratorOptions::default())
            .unwrap();
        assert_eq!(body(&conversion.text), ["@\t300\tIN\tA\t1.2.3.4"]);
    }

    #[test]
    fn test_header_and_footer() {
        let conversion =
            generate_zone_text("example.com", Vec::new(), &GeneratorOptions::default()).unwrap();
        let lines: Vec<&str> = conversion.text.split('\n').collect();
        assert_eq!(lines[0], "$ORIGIN example.com.");
        assert!(lines[1].starts_with(";; Exported from Route 53 JSON"));
        assert!(lines[1].ends_with("Cloudflare"));
        assert!(lines[2].starts_with(";; SOA/NS are commented out"));
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], FOOTER);
        assert_eq!(lines.len(), 6);
        assert!(!conversion.text.ends_with('\n'));
    }

    #[test]
    fn test_target_provider_in_header() {
        let options = GeneratorOptions::new().target_provider("deSEC");
        let conversion = generate_zone_text("example.com.", Vec::new(), &options).unwrap();
        assert!(conversion.text.contains("import into deSEC"));
        assert!(conversion.text.contains("importing to deSEC."));
    }

    #[test]
    fn test_blank_origin_fails() {
        let rrset = ResourceRecordSet::new("example.com.", "A", ["1.2.3.4"]);
        let err = generate_zone_text("  ", vec![rrset], &GeneratorOptions::default()).unwrap_err();
        assert!(matches!(err, ZoneError::MissingOrigin(_)));
    }

    #[test]
    fn test_cname_target_is_qualified() {
        let rrset = ResourceRecordSet::new("www.example.com.", "CNAME", ["target.example.com"])
            .with_ttl(60);
        assert_eq!(
            render(&rrset).lines().collect::<Vec<_>>(),
            ["www.example.com.\t60\tIN\tCNAME\ttarget.example.com."]
        );
    }

    #[test]
    fn test_mx_exchange_is_qualified() {
        let rrset = ResourceRecordSet::new("example.com.", "MX", ["10 mail.example.com", "20 1.2.3.4"]);
        assert_eq!(
            render(&rrset).lines().collect::<Vec<_>>(),
            [
                "@\t300\tIN\tMX\t10 mail.example.com.",
                "@\t300\tIN\tMX\t20 1.2.3.4",
            ]
        );
    }

    #[test]
    fn test_mx_without_preference_falls_through() {
        let rrset = ResourceRecordSet::new("example.com.", "MX", ["mail.example.com"]);
        assert_eq!(
            render(&rrset).lines().collect::<Vec<_>>(),
            ["@\t300\tIN\tMX\tmail.example.com."]
        );
    }

    #[test]
    fn test_parse_mx() {
        assert_eq!(parse_mx("10 mail.example.com"), Some(("10", "mail.example.com".into())));
        assert_eq!(parse_mx("5\tmx.example.com."), Some(("5", "mx.example.com.".into())));
        assert_eq!(parse_mx("10  a  b "), Some(("10", "a b".into())));
        assert_eq!(parse_mx("mail.example.com"), None);
        assert_eq!(parse_mx("10"), None);
        assert_eq!(parse_mx("10 "), None);
        assert_eq!(parse_mx("10mail.example.com"), None);
        assert_eq!(parse_mx(" 10 mail.example.com"), None);
    }

    #[test]
    fn test_txt_and_spf_are_quoted() {
        let rrset = ResourceRecordSet::new(
            "example.com.",
            "TXT",
            [r#""v=spf1 include:_spf.google.com ~all""#, r#"say "hi""#],
        );
        assert_eq!(
            render(&rrset).lines().collect::<Vec<_>>(),
            [
                "@\t300\tIN\tTXT\t\"v=spf1 include:_spf.google.com ~all\"",
                "@\t300\tIN\tTXT\t\"say \\\"hi\\\"\"",
            ]
        );
        let rrset = ResourceRecordSet::new("example.com.", "SPF", ["v=spf1 -all"]);
        assert_eq!(
            render(&rrset).lines().collect::<Vec<_>>(),
            ["@\t300\tIN\tSPF\t\"v=spf1 -all\""]
        );
    }

    #[test]
    fn test_other_types_are_verbatim() {
        let rrset = ResourceRecordSet::new(
            "_sip._tcp.example.com.",
            "SRV",
            ["10 60 5060 sip.example.com"],
        );
        assert_eq!(
            render(&rrset).lines().collect::<Vec<_>>(),
            ["_sip._tcp.example.com.\t300\tIN\tSRV\t10 60 5060 sip.example.com"]
        );
        let rrset = ResourceRecordSet::new("host.example.com", "AAAA", ["2001:db8::1"]);
        assert_eq!(
            render(&rrset).lines().collect::<Vec<_>>(),
            ["host.example.com\t300\tIN\tAAAA\t2001:db8::1"]
        );
    }

    #[test]
    fn test_soa_is_comment_only() {
        let rrset = ResourceRecordSet::new(
            "example.com.",
            "SOA",
            ["ns-1.awsdns-01.org. awsdns-hostmaster.amazon.com. 1 7200 900 1209600 86400"],
        )
        .with_ttl(900);
        let outcome = render(&rrset);
        assert_eq!(
            outcome.lines().collect::<Vec<_>>(),
            ["; SOA @ 900 IN SOA ns-1.awsdns-01.org. awsdns-hostmaster.amazon.com. 1 7200 900 1209600 86400"]
        );
        assert_eq!(outcome.active_lines(), 0);

        let empty = ResourceRecordSet {
            name: Some("example.com.".into()),
            record_type: Some(RecordType::Soa),
            ..ResourceRecordSet::default()
        };
        assert_eq!(render(&empty).lines().collect::<Vec<_>>(), ["; SOA @ 300 IN SOA"]);
    }

    #[test]
    fn test_ns_is_comment_only() {
        let rrset = ResourceRecordSet::new(
            "example.com.",
            "NS",
            ["ns-1.awsdns-01.org.", "ns-2.awsdns-02.co.uk."],
        )
        .with_ttl(172_800);
        let outcome = render(&rrset);
        assert!(matches!(outcome, RecordOutcome::CommentOnly { .. }));
        assert_eq!(
            outcome.lines().collect::<Vec<_>>(),
            [
                "; NS @ 172800 IN NS ns-1.awsdns-01.org.",
                "; NS @ 172800 IN NS ns-2.awsdns-02.co.uk.",
            ]
        );
    }

    #[test]
    fn test_ns_delegation_set_and_absence() {
        let delegated = ResourceRecordSet {
            name: Some("sub.example.com.".into()),
            record_type: Some(RecordType::Ns),
            delegation_set_id: Some("N1PA6795SAMPLE".into()),
            ..ResourceRecordSet::default()
        };
        assert_eq!(
            render(&delegated).lines().collect::<Vec<_>>(),
            ["; NS sub.example.com. (DelegationSetId: N1PA6795SAMPLE)"]
        );

        let bare = ResourceRecordSet {
            name: Some("sub.example.com.".into()),
            record_type: Some(RecordType::Ns),
            resource_records: Some(Vec::new()),
            ..ResourceRecordSet::default()
        };
        assert_eq!(
            render(&bare).lines().collect::<Vec<_>>(),
            ["; NS sub.example.com. (no ResourceRecords)"]
        );
    }

    #[test]
    fn test_soa_and_ns_never_active_even_with_alias() {
        for tag in ["SOA", "NS"] {
            let rrset = ResourceRecordSet::alias("www.example.com.", tag, "x.example.net.", "Z1");
            assert_eq!(render(&rrset).active_lines(), 0, "{tag}");
        }
    }

    #[test]
    fn test_non_apex_alias_becomes_cname() {
        let rrset = ResourceRecordSet::alias(
            "cdn.example.com.",
            "A",
            "d111111abcdef8.cloudfront.net",
            "Z2FDTNDATAQYW2",
        );
        let outcome = render(&rrset);
        assert_eq!(outcome.active_lines(), 1);
        assert_eq!(
            outcome.lines().collect::<Vec<_>>(),
            [
                "; ALIAS cdn.example.com. -> d111111abcdef8.cloudfront.net (HostedZoneId:Z2FDTNDATAQYW2)",
                "cdn.example.com.\t300\tIN\tCNAME\td111111abcdef8.cloudfront.net.",
            ]
        );
    }

    #[test]
    fn test_apex_alias_is_comment_only() {
        let rrset = ResourceRecordSet::alias(
            "example.com.",
            "A",
            "dualstack.my-elb-123.us-east-1.elb.amazonaws.com.",
            "Z35SXDOTRQ7X7K",
        );
        let outcome = render(&rrset);
        assert!(matches!(outcome, RecordOutcome::CommentOnly { .. }));
        let lines: Vec<&str> = outcome.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "; ALIAS @ -> dualstack.my-elb-123.us-east-1.elb.amazonaws.com. (HostedZoneId:Z35SXDOTRQ7X7K)"
        );
        assert_eq!(
            lines[1],
            "; NOTE: Apex ALIAS present for example.com.; recreate using CNAME flattening or A records in your DNS provider."
        );
        assert!(lines.iter().all(|l| l.starts_with(';')));
    }

    #[test]
    fn test_alias_ignores_direct_values() {
        let mut rrset = ResourceRecordSet::alias("www.example.com.", "A", "lb.example.net", "Z1");
        rrset.resource_records = ResourceRecordSet::new("", "A", ["9.9.9.9"]).resource_records;
        let outcome = render(&rrset);
        assert!(!outcome.lines().any(|l| l.contains("9.9.9.9")));
        assert_eq!(outcome.active_lines(), 1);

        let options = GeneratorOptions::default();
        let zone = zone(Vec::new());
        let diagnostics = ZoneGenerator::new(&options).review_record(&zone, 4, &rrset);
        assert!(diagnostics
            .iter()
            .any(|d| d.is_warning() && d.message.contains("values were ignored")));
        assert!(diagnostics.iter().all(|d| d.record == Some(4)));
    }

    #[test]
    fn test_alias_comment_carries_routing_meta() {
        let rrset = ResourceRecordSet::alias("api.example.com.", "A", "api-eu.example.net.", "Z9")
            .with_routing(RoutingMeta {
                set_identifier: Some(json!("eu")),
                region: Some(json!("eu-central-1")),
                ..RoutingMeta::default()
            });
        let lines: Vec<String> = render(&rrset).lines().map(str::to_string).collect();
        assert_eq!(
            lines[0],
            "; ALIAS api.example.com. -> api-eu.example.net. (HostedZoneId:Z9) ; META: SetIdentifier:eu | Region:eu-central-1"
        );
        assert_eq!(lines[1], "api.example.com.\t300\tIN\tCNAME\tapi-eu.example.net.");
    }

    #[test]
    fn test_values_followed_by_meta_line() {
        let rrset = ResourceRecordSet::new("www.example.com.", "A", ["1.1.1.1", "2.2.2.2"])
            .with_ttl(60)
            .with_routing(RoutingMeta {
                set_identifier: Some(json!("primary")),
                failover: Some(json!("PRIMARY")),
                health_check_id: Some(json!("hc-1")),
                ..RoutingMeta::default()
            });
        let outcome = render(&rrset);
        assert_eq!(outcome.active_lines(), 2);
        assert_eq!(
            outcome.lines().collect::<Vec<_>>(),
            [
                "www.example.com.\t60\tIN\tA\t1.1.1.1",
                "www.example.com.\t60\tIN\tA\t2.2.2.2",
                "; META: SetIdentifier:primary | Failover:PRIMARY | HealthCheckId:hc-1",
            ]
        );
    }

    #[test]
    fn test_skipped_record() {
        let rrset = ResourceRecordSet {
            name: Some("empty.example.com.".into()),
            record_type: Some(RecordType::A),
            resource_records: Some(Vec::new()),
            ..ResourceRecordSet::default()
        };
        assert_eq!(
            render(&rrset),
            RecordOutcome::Skipped {
                line: "; SKIPPED empty.example.com. A (no ResourceRecords, no AliasTarget)".into()
            }
        );

        let weighted = rrset.with_routing(RoutingMeta {
            weight: Some(json!(20)),
            ..RoutingMeta::default()
        });
        assert_eq!(
            render(&weighted).lines().collect::<Vec<_>>(),
            ["; SKIPPED empty.example.com. A (no ResourceRecords, no AliasTarget) ; META: Weight:20"]
        );
    }

    #[test]
    fn test_blank_record_set_is_skipped() {
        let outcome = render(&ResourceRecordSet::default());
        assert_eq!(
            outcome.lines().collect::<Vec<_>>(),
            ["; SKIPPED (no ResourceRecords, no AliasTarget)"]
        );
    }

    #[test]
    fn test_order_is_preserved_and_duplicates_kept() {
        let records = vec![
            ResourceRecordSet::new("b.example.com.", "A", ["2.2.2.2"]),
            ResourceRecordSet::new("a.example.com.", "A", ["1.1.1.1"]),
            ResourceRecordSet::new("b.example.com.", "A", ["2.2.2.2"]),
        ];
        let conversion =
            generate_zone_text("example.com", records, &GeneratorOptions::default()).unwrap();
        assert_eq!(
            body(&conversion.text),
            [
                "b.example.com.\t300\tIN\tA\t2.2.2.2",
                "a.example.com.\t300\tIN\tA\t1.1.1.1",
                "b.example.com.\t300\tIN\tA\t2.2.2.2",
            ]
        );
        assert_eq!(conversion.stats.emitted, 3);
        assert_eq!(conversion.stats.active_lines, 3);
    }

    #[test]
    fn test_custom_default_ttl() {
        let options = GeneratorOptions::new().default_ttl(3600);
        let zone = zone(Vec::new());
        let rrset = ResourceRecordSet::new("www.example.com.", "A", ["1.2.3.4"]);
        assert_eq!(
            ZoneGenerator::new(&options)
                .render_record(&zone, &rrset)
                .lines()
                .collect::<Vec<_>>(),
            ["www.example.com.\t3600\tIN\tA\t1.2.3.4"]
        );
    }

    #[test]
    fn test_review_flags() {
        let options = GeneratorOptions::default();
        let zone = zone(Vec::new());
        let generator = ZoneGenerator::new(&options);

        let apex = ResourceRecordSet::alias("example.com.", "A", "lb.example.net.", "Z1");
        let found = generator.review_record(&zone, 0, &apex);
        assert_eq!(found.len(), 1);
        assert!(found[0].is_warning());
        assert_eq!(found[0].name.as_deref(), Some("example.com."));

        let mx = ResourceRecordSet::new("example.com.", "MX", ["10 mx.example.com", "mx2.example.com"]);
        let found = generator.review_record(&zone, 1, &mx);
        assert_eq!(found.len(), 1);
        assert!(found[0].message.contains("mx2.example.com"));

        let plain = ResourceRecordSet::new("www.example.com.", "A", ["1.2.3.4"]);
        assert!(generator.review_record(&zone, 2, &plain).is_empty());

        let soa = ResourceRecordSet::new("example.com.", "SOA", Vec::<String>::new());
        assert!(generator.review_record(&zone, 3, &soa).is_empty());
    }
}
