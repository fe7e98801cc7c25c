// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use aws_sdk_rds::primitives::{DateTime, DateTimeFormat};
use aws_sdk_rds::types::{
    CertificateDetails,
    ClusterPendingModifiedValues,
    DbCluster,
    RdsCustomClusterConfiguration,
};
use dbinit_rotation::ClusterMetadata;
use serde_json::{Map, Value};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

type Doc = Map<String, Value>;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Renders the cluster description with the attribute names of the RDS API,
/// which is the document policy scripts see as `cluster`.
///
/// Absent scalar attributes are omitted, list attributes are always present.
/// Timestamps are rendered as RFC 3339 strings, enumerations as their API
/// string values.
pub fn cluster_metadata_from_rds(c: &DbCluster) -> ClusterMetadata {
    let mut doc = Doc::new();

    put(&mut doc, "AllocatedStorage", c.allocated_storage());
    put_strings(&mut doc, "AvailabilityZones", c.availability_zones());
    put(&mut doc, "BackupRetentionPeriod", c.backup_retention_period());
    put(&mut doc, "CharacterSetName", c.character_set_name());
    put(&mut doc, ClusterMetadata::DATABASE_NAME, c.database_name());
    put(&mut doc, ClusterMetadata::IDENTIFIER, c.db_cluster_identifier());
    put(&mut doc, "DBClusterParameterGroup", c.db_cluster_parameter_group());
    put(&mut doc, "DBSubnetGroup", c.db_subnet_group());
    put(&mut doc, "Status", c.status());
    put(&mut doc, "PercentProgress", c.percent_progress());
    put_time(&mut doc, "EarliestRestorableTime", c.earliest_restorable_time());
    put(&mut doc, ClusterMetadata::ENDPOINT, c.endpoint());
    put(&mut doc, "ReaderEndpoint", c.reader_endpoint());
    put_strings(&mut doc, "CustomEndpoints", c.custom_endpoints());
    put(&mut doc, "MultiAZ", c.multi_az());
    put(&mut doc, ClusterMetadata::ENGINE, c.engine());
    put(&mut doc, "EngineVersion", c.engine_version());
    put_time(&mut doc, "LatestRestorableTime", c.latest_restorable_time());
    put(&mut doc, ClusterMetadata::PORT, c.port());
    put(&mut doc, ClusterMetadata::MASTER_USERNAME, c.master_username());
    put_list(
        &mut doc,
        "DBClusterOptionGroupMemberships",
        c.db_cluster_option_group_memberships(),
        |m| {
            object(|o| {
                put(o, "DBClusterOptionGroupName", m.db_cluster_option_group_name());
                put(o, "Status", m.status());
            })
        },
    );
    put(&mut doc, "PreferredBackupWindow", c.preferred_backup_window());
    put(&mut doc, "PreferredMaintenanceWindow", c.preferred_maintenance_window());
    put(&mut doc, "UpgradeRolloutOrder", c.upgrade_rollout_order().map(|v| v.as_str()));
    put(&mut doc, "ReplicationSourceIdentifier", c.replication_source_identifier());
    put_strings(&mut doc, "ReadReplicaIdentifiers", c.read_replica_identifiers());
    put_list(&mut doc, "StatusInfos", c.status_infos(), |s| {
        object(|o| {
            put(o, "StatusType", s.status_type());
            put(o, "Normal", s.normal());
            put(o, "Status", s.status());
            put(o, "Message", s.message());
        })
    });
    put_list(&mut doc, "DBClusterMembers", c.db_cluster_members(), |m| {
        object(|o| {
            put(o, "DBInstanceIdentifier", m.db_instance_identifier());
            put(o, "IsClusterWriter", m.is_cluster_writer());
            put(o, "DBClusterParameterGroupStatus", m.db_cluster_parameter_group_status());
            put(o, "PromotionTier", m.promotion_tier());
        })
    });
    put_list(&mut doc, "VpcSecurityGroups", c.vpc_security_groups(), |g| {
        object(|o| {
            put(o, "VpcSecurityGroupId", g.vpc_security_group_id());
            put(o, "Status", g.status());
        })
    });
    put(&mut doc, "HostedZoneId", c.hosted_zone_id());
    put(&mut doc, "StorageEncrypted", c.storage_encrypted());
    put(&mut doc, "StorageEncryptionType", c.storage_encryption_type().map(|v| v.as_str()));
    put(&mut doc, "KmsKeyId", c.kms_key_id());
    put(&mut doc, "DbClusterResourceId", c.db_cluster_resource_id());
    put(&mut doc, "DBClusterArn", c.db_cluster_arn());
    put_list(&mut doc, "AssociatedRoles", c.associated_roles(), |r| {
        object(|o| {
            put(o, "RoleArn", r.role_arn());
            put(o, "Status", r.status());
            put(o, "FeatureName", r.feature_name());
        })
    });
    put(
        &mut doc,
        "IAMDatabaseAuthenticationEnabled",
        c.iam_database_authentication_enabled(),
    );
    put(&mut doc, "CloneGroupId", c.clone_group_id());
    put_time(&mut doc, "ClusterCreateTime", c.cluster_create_time());
    put_time(&mut doc, "EarliestBacktrackTime", c.earliest_backtrack_time());
    put(&mut doc, "BacktrackWindow", c.backtrack_window());
    put(
        &mut doc,
        "BacktrackConsumedChangeRecords",
        c.backtrack_consumed_change_records(),
    );
    put_strings(
        &mut doc,
        "EnabledCloudwatchLogsExports",
        c.enabled_cloudwatch_logs_exports(),
    );
    put(&mut doc, "Capacity", c.capacity());
    put(
        &mut doc,
        "PendingModifiedValues",
        c.pending_modified_values().map(pending_modified_values),
    );
    put(&mut doc, "EngineMode", c.engine_mode());
    put(
        &mut doc,
        "ScalingConfigurationInfo",
        c.scaling_configuration_info().map(|s| {
            object(|o| {
                put(o, "MinCapacity", s.min_capacity());
                put(o, "MaxCapacity", s.max_capacity());
                put(o, "AutoPause", s.auto_pause());
                put(o, "SecondsUntilAutoPause", s.seconds_until_auto_pause());
                put(o, "TimeoutAction", s.timeout_action());
                put(o, "SecondsBeforeTimeout", s.seconds_before_timeout());
            })
        }),
    );
    put(
        &mut doc,
        "RdsCustomClusterConfiguration",
        c.rds_custom_cluster_configuration()
            .map(rds_custom_cluster_configuration),
    );
    put(&mut doc, "DBClusterInstanceClass", c.db_cluster_instance_class());
    put(&mut doc, "StorageType", c.storage_type());
    put(&mut doc, "Iops", c.iops());
    put(&mut doc, "StorageThroughput", c.storage_throughput());
    put_time(
        &mut doc,
        "IOOptimizedNextAllowedModificationTime",
        c.io_optimized_next_allowed_modification_time(),
    );
    put(&mut doc, "PubliclyAccessible", c.publicly_accessible());
    put(&mut doc, "AutoMinorVersionUpgrade", c.auto_minor_version_upgrade());
    put(&mut doc, "DeletionProtection", c.deletion_protection());
    put(&mut doc, "HttpEndpointEnabled", c.http_endpoint_enabled());
    put(&mut doc, "ActivityStreamMode", c.activity_stream_mode().map(|v| v.as_str()));
    put(&mut doc, "ActivityStreamStatus", c.activity_stream_status().map(|v| v.as_str()));
    put(&mut doc, "ActivityStreamKmsKeyId", c.activity_stream_kms_key_id());
    put(
        &mut doc,
        "ActivityStreamKinesisStreamName",
        c.activity_stream_kinesis_stream_name(),
    );
    put(&mut doc, "CopyTagsToSnapshot", c.copy_tags_to_snapshot());
    put(&mut doc, "CrossAccountClone", c.cross_account_clone());
    put_list(&mut doc, "DomainMemberships", c.domain_memberships(), |d| {
        object(|o| {
            put(o, "Domain", d.domain());
            put(o, "Status", d.status());
            put(o, "FQDN", d.fqdn());
            put(o, "IAMRoleName", d.iam_role_name());
            put(o, "OU", d.ou());
            put(o, "AuthSecretArn", d.auth_secret_arn());
            put_strings(o, "DnsIps", d.dns_ips());
        })
    });
    put_list(&mut doc, "TagList", c.tag_list(), |t| {
        object(|o| {
            put(o, "Key", t.key());
            put(o, "Value", t.value());
        })
    });
    put(&mut doc, "GlobalClusterIdentifier", c.global_cluster_identifier());
    put(
        &mut doc,
        "GlobalWriteForwardingStatus",
        c.global_write_forwarding_status().map(|v| v.as_str()),
    );
    put(
        &mut doc,
        "GlobalWriteForwardingRequested",
        c.global_write_forwarding_requested(),
    );
    put(&mut doc, "NetworkType", c.network_type());
    put_time(&mut doc, "AutomaticRestartTime", c.automatic_restart_time());
    put(&mut doc, "MonitoringInterval", c.monitoring_interval());
    put(&mut doc, "MonitoringRoleArn", c.monitoring_role_arn());
    put(&mut doc, "DatabaseInsightsMode", c.database_insights_mode().map(|v| v.as_str()));
    put(&mut doc, "PerformanceInsightsEnabled", c.performance_insights_enabled());
    put(
        &mut doc,
        "PerformanceInsightsKMSKeyId",
        c.performance_insights_kms_key_id(),
    );
    put(
        &mut doc,
        "PerformanceInsightsRetentionPeriod",
        c.performance_insights_retention_period(),
    );
    put(&mut doc, "DBSystemId", c.db_system_id());
    put(
        &mut doc,
        "MasterUserSecret",
        c.master_user_secret().map(|s| {
            object(|o| {
                put(o, "SecretArn", s.secret_arn());
                put(o, "SecretStatus", s.secret_status());
                put(o, "KmsKeyId", s.kms_key_id());
            })
        }),
    );
    put(
        &mut doc,
        "LocalWriteForwardingStatus",
        c.local_write_forwarding_status().map(|v| v.as_str()),
    );
    put(&mut doc, "AwsBackupRecoveryPointArn", c.aws_backup_recovery_point_arn());
    put(
        &mut doc,
        "LimitlessDatabase",
        c.limitless_database().map(|l| {
            object(|o| {
                put(o, "Status", l.status().map(|v| v.as_str()));
                put(o, "MinRequiredACU", l.min_required_acu());
            })
        }),
    );
    put(
        &mut doc,
        "ClusterScalabilityType",
        c.cluster_scalability_type().map(|v| v.as_str()),
    );
    put(&mut doc, "CertificateDetails", c.certificate_details().map(certificate_details));
    put(&mut doc, "EngineLifecycleSupport", c.engine_lifecycle_support());
    put(&mut doc, "VPCNetworkingEnabled", c.vpc_networking_enabled());
    put(
        &mut doc,
        "InternetAccessGatewayEnabled",
        c.internet_access_gateway_enabled(),
    );

    ClusterMetadata::new(Value::Object(doc))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

// The pending master password is never exposed to scripts
fn pending_modified_values(p: &ClusterPendingModifiedValues) -> Value {
    object(|o| {
        put(
            o,
            "PendingCloudwatchLogsExports",
            p.pending_cloudwatch_logs_exports().map(|e| {
                object(|o| {
                    put_strings(o, "LogTypesToEnable", e.log_types_to_enable());
                    put_strings(o, "LogTypesToDisable", e.log_types_to_disable());
                })
            }),
        );
        put(o, ClusterMetadata::IDENTIFIER, p.db_cluster_identifier());
        put(
            o,
            "IAMDatabaseAuthenticationEnabled",
            p.iam_database_authentication_enabled(),
        );
        put(o, "EngineVersion", p.engine_version());
        put(o, "BackupRetentionPeriod", p.backup_retention_period());
        put(o, "StorageType", p.storage_type());
        put(o, "AllocatedStorage", p.allocated_storage());
        put(
            o,
            "RdsCustomClusterConfiguration",
            p.rds_custom_cluster_configuration()
                .map(rds_custom_cluster_configuration),
        );
        put(o, "Iops", p.iops());
        put(o, "CertificateDetails", p.certificate_details().map(certificate_details));
    })
}

fn rds_custom_cluster_configuration(r: &RdsCustomClusterConfiguration) -> Value {
    object(|o| {
        put(o, "InterconnectSubnetId", r.interconnect_subnet_id());
        put(
            o,
            "TransitGatewayMulticastDomainId",
            r.transit_gateway_multicast_domain_id(),
        );
        put(o, "ReplicaMode", r.replica_mode().map(|v| v.as_str()));
    })
}

fn certificate_details(d: &CertificateDetails) -> Value {
    object(|o| {
        put(o, "CAIdentifier", d.ca_identifier());
        put_time(o, "ValidTill", d.valid_till());
    })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn object(build: impl FnOnce(&mut Doc)) -> Value {
    let mut doc = Doc::new();
    build(&mut doc);
    Value::Object(doc)
}

fn put<V: Into<Value>>(doc: &mut Doc, key: &str, value: Option<V>) {
    if let Some(value) = value {
        doc.insert(key.to_string(), value.into());
    }
}

fn put_time(doc: &mut Doc, key: &str, value: Option<&DateTime>) {
    put(
        doc,
        key,
        value.and_then(|t| t.fmt(DateTimeFormat::DateTime).ok()),
    );
}

fn put_list<T>(doc: &mut Doc, key: &str, items: &[T], render: impl Fn(&T) -> Value) {
    doc.insert(key.to_string(), items.iter().map(render).collect());
}

fn put_strings(doc: &mut Doc, key: &str, items: &[String]) {
    put_list(doc, key, items, |s| Value::from(s.as_str()));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
