//! # Error Code Catalog
//!
//! Numeric error codes published by the service for its error classes
//! (`ipalib/errors.py`). The codes are reference data: error envelopes already carry
//! their own name and code, so nothing here changes how errors are reported.

// Public and internal failures
pub const PUBLIC_ERROR: i64 = 900;
pub const VERSION_ERROR: i64 = 901;
pub const UNKNOWN_ERROR: i64 = 902;
pub const INTERNAL_ERROR: i64 = 903;
pub const SERVER_INTERNAL_ERROR: i64 = 904;
pub const COMMAND_ERROR: i64 = 905;
pub const SERVER_COMMAND_ERROR: i64 = 906;
pub const NETWORK_ERROR: i64 = 907;
pub const SERVER_NETWORK_ERROR: i64 = 908;
pub const JSON_ERROR: i64 = 909;
pub const XMLRPC_MARSHALL_ERROR: i64 = 910;
pub const REFERER_ERROR: i64 = 911;
pub const ENVIRONMENT_ERROR: i64 = 912;
pub const SYSTEM_ENCODING_ERROR: i64 = 913;

// Authentication
pub const AUTHENTICATION_ERROR: i64 = 1000;

// Kerberos
pub const KERBEROS_ERROR: i64 = 1100;
pub const CCACHE_ERROR: i64 = 1101;
pub const SERVICE_ERROR: i64 = 1102;
pub const NO_CCACHE_ERROR: i64 = 1103;
pub const TICKET_EXPIRED: i64 = 1104;
pub const BAD_CCACHE_PERMS: i64 = 1105;
pub const BAD_CCACHE_FORMAT: i64 = 1106;
pub const CANNOT_RESOLVE_KDC: i64 = 1107;

// Sessions
pub const SESSION_ERROR: i64 = 1200;
pub const INVALID_SESSION_PASSWORD: i64 = 1201;
pub const PASSWORD_EXPIRED: i64 = 1202;
pub const KRB_PRINCIPAL_EXPIRED: i64 = 1203;
pub const USER_LOCKED: i64 = 1204;

// Authorization
pub const AUTHORIZATION_ERROR: i64 = 2000;
pub const ACI_ERROR: i64 = 2100;

// Invocation
pub const INVOCATION_ERROR: i64 = 3000;
pub const ENCODING_ERROR: i64 = 3001;
pub const BINARY_ENCODING_ERROR: i64 = 3002;
pub const ZERO_ARGUMENT_ERROR: i64 = 3003;
pub const MAX_ARGUMENT_ERROR: i64 = 3004;
pub const OPTION_ERROR: i64 = 3005;
pub const OVERLAP_ERROR: i64 = 3006;
pub const REQUIREMENT_ERROR: i64 = 3007;
pub const CONVERSION_ERROR: i64 = 3008;
pub const VALIDATION_ERROR: i64 = 3009;
pub const NO_SUCH_NAMESPACE_ERROR: i64 = 3010;
pub const PASSWORD_MISMATCH: i64 = 3011;
pub const NOT_IMPLEMENTED_ERROR: i64 = 3012;
pub const NOT_CONFIGURED_ERROR: i64 = 3013;
pub const PROMPT_FAILED: i64 = 3014;
pub const DEPRECATION_ERROR: i64 = 3015;
pub const NOT_A_FOREST_ROOT_ERROR: i64 = 3016;

// Execution
pub const EXECUTION_ERROR: i64 = 4000;
pub const NOT_FOUND: i64 = 4001;
pub const DUPLICATE_ENTRY: i64 = 4002;
pub const HOST_SERVICE: i64 = 4003;
pub const MALFORMED_SERVICE_PRINCIPAL: i64 = 4004;
pub const REALM_MISMATCH: i64 = 4005;
pub const REQUIRES_ROOT: i64 = 4006;
pub const ALREADY_POSIX_GROUP: i64 = 4007;
pub const MALFORMED_USER_PRINCIPAL: i64 = 4008;
pub const ALREADY_ACTIVE: i64 = 4009;
pub const ALREADY_INACTIVE: i64 = 4010;
pub const HAS_NS_ACCOUNT_LOCK: i64 = 4011;
pub const NOT_GROUP_MEMBER: i64 = 4012;
pub const RECURSIVE_GROUP: i64 = 4013;
pub const ALREADY_GROUP_MEMBER: i64 = 4014;
pub const BASE64_DECODE_ERROR: i64 = 4015;
pub const REMOTE_RETRIEVE_ERROR: i64 = 4016;
pub const SAME_GROUP_ERROR: i64 = 4017;
pub const DEFAULT_GROUP_ERROR: i64 = 4018;
pub const DNS_NOT_A_RECORD_ERROR: i64 = 4019;
pub const MANAGED_GROUP_ERROR: i64 = 4020;
pub const MANAGED_POLICY_ERROR: i64 = 4021;
pub const FILE_ERROR: i64 = 4022;
pub const NO_CERTIFICATE_ERROR: i64 = 4023;
pub const MANAGED_GROUP_EXISTS_ERROR: i64 = 4024;
pub const REVERSE_MEMBER_ERROR: i64 = 4025;
pub const ATTR_VALUE_NOT_FOUND: i64 = 4026;
pub const SINGLE_MATCH_EXPECTED: i64 = 4027;
pub const ALREADY_EXTERNAL_GROUP: i64 = 4028;
pub const EXTERNAL_GROUP_VIOLATION: i64 = 4029;
pub const POSIX_GROUP_VIOLATION: i64 = 4030;
pub const EMPTY_RESULT: i64 = 4031;
pub const INVALID_DOMAIN_LEVEL_ERROR: i64 = 4032;
pub const SERVER_REMOVAL_ERROR: i64 = 4033;
pub const OPERATION_NOT_SUPPORTED_FOR_PRINCIPAL_TYPE: i64 = 4034;
pub const HTTP_REQUEST_ERROR: i64 = 4035;
pub const REDUNDANT_MAPPING_RULE: i64 = 4036;
pub const CSR_TEMPLATE_ERROR: i64 = 4037;
pub const ALREADY_CONTAINS_VALUE_ERROR: i64 = 4038;

// Builtins
pub const BUILTIN_ERROR: i64 = 4100;
pub const HELP_ERROR: i64 = 4101;

// LDAP
pub const LDAP_ERROR: i64 = 4200;
pub const MIDAIR_COLLISION: i64 = 4201;
pub const EMPTY_MODLIST: i64 = 4202;
pub const DATABASE_ERROR: i64 = 4203;
pub const LIMITS_EXCEEDED: i64 = 4204;
pub const OBJECTCLASS_VIOLATION: i64 = 4205;
pub const NOT_ALLOWED_ON_RDN: i64 = 4206;
pub const ONLY_ONE_VALUE_ALLOWED: i64 = 4207;
pub const INVALID_SYNTAX: i64 = 4208;
pub const BAD_SEARCH_FILTER: i64 = 4209;
pub const NOT_ALLOWED_ON_NON_LEAF: i64 = 4210;
pub const DATABASE_TIMEOUT: i64 = 4211;
pub const DNS_DATA_MISMATCH: i64 = 4212;
pub const TASK_TIMEOUT: i64 = 4213;
pub const TIME_LIMIT_EXCEEDED: i64 = 4214;
pub const SIZE_LIMIT_EXCEEDED: i64 = 4215;
pub const ADMIN_LIMIT_EXCEEDED: i64 = 4216;

// Certificates
pub const CERTIFICATE_ERROR: i64 = 4300;
pub const CERTIFICATE_OPERATION_ERROR: i64 = 4301;
pub const CERTIFICATE_FORMAT_ERROR: i64 = 4302;
pub const MUTUALLY_EXCLUSIVE_ERROR: i64 = 4303;
pub const NON_FATAL_ERROR: i64 = 4304;
pub const ALREADY_REGISTERED_ERROR: i64 = 4305;
pub const NOT_REGISTERED_ERROR: i64 = 4306;
pub const DEPENDENT_ENTRY: i64 = 4307;
pub const LAST_MEMBER_ERROR: i64 = 4308;
pub const PROTECTED_ENTRY_ERROR: i64 = 4309;
pub const CERTIFICATE_INVALID_ERROR: i64 = 4310;
pub const SCHEMA_UP_TO_DATE: i64 = 4311;

// DNS
pub const DNS_ERROR: i64 = 4400;
pub const DNS_RESOLVER_ERROR: i64 = 4401;

// Trusts
pub const TRUST_ERROR: i64 = 4500;
pub const TRUST_TOPOLOGY_CONFLICT_ERROR: i64 = 4501;

// Generic
pub const GENERIC_ERROR: i64 = 5000;

/// Returns the error class name registered for `code`.
pub fn name(code: i64) -> Option<&'static str> {
    let name = match code {
        PUBLIC_ERROR => "PublicError",
        VERSION_ERROR => "VersionError",
        UNKNOWN_ERROR => "UnknownError",
        INTERNAL_ERROR => "InternalError",
        SERVER_INTERNAL_ERROR => "ServerInternalError",
        COMMAND_ERROR => "CommandError",
        SERVER_COMMAND_ERROR => "ServerCommandError",
        NETWORK_ERROR => "NetworkError",
        SERVER_NETWORK_ERROR => "ServerNetworkError",
        JSON_ERROR => "JSONError",
        XMLRPC_MARSHALL_ERROR => "XMLRPCMarshallError",
        REFERER_ERROR => "RefererError",
        ENVIRONMENT_ERROR => "EnvironmentError",
        SYSTEM_ENCODING_ERROR => "SystemEncodingError",
        AUTHENTICATION_ERROR => "AuthenticationError",
        KERBEROS_ERROR => "KerberosError",
        CCACHE_ERROR => "CCacheError",
        SERVICE_ERROR => "ServiceError",
        NO_CCACHE_ERROR => "NoCCacheError",
        TICKET_EXPIRED => "TicketExpired",
        BAD_CCACHE_PERMS => "BadCCachePerms",
        BAD_CCACHE_FORMAT => "BadCCacheFormat",
        CANNOT_RESOLVE_KDC => "CannotResolveKDC",
        SESSION_ERROR => "SessionError",
        INVALID_SESSION_PASSWORD => "InvalidSessionPassword",
        PASSWORD_EXPIRED => "PasswordExpired",
        KRB_PRINCIPAL_EXPIRED => "KrbPrincipalExpired",
        USER_LOCKED => "UserLocked",
        AUTHORIZATION_ERROR => "AuthorizationError",
        ACI_ERROR => "ACIError",
        INVOCATION_ERROR => "InvocationError",
        ENCODING_ERROR => "EncodingError",
        BINARY_ENCODING_ERROR => "BinaryEncodingError",
        ZERO_ARGUMENT_ERROR => "ZeroArgumentError",
        MAX_ARGUMENT_ERROR => "MaxArgumentError",
        OPTION_ERROR => "OptionError",
        OVERLAP_ERROR => "OverlapError",
        REQUIREMENT_ERROR => "RequirementError",
        CONVERSION_ERROR => "ConversionError",
        VALIDATION_ERROR => "ValidationError",
        NO_SUCH_NAMESPACE_ERROR => "NoSuchNamespaceError",
        PASSWORD_MISMATCH => "PasswordMismatch",
        NOT_IMPLEMENTED_ERROR => "NotImplementedError",
        NOT_CONFIGURED_ERROR => "NotConfiguredError",
        PROMPT_FAILED => "PromptFailed",
        DEPRECATION_ERROR => "DeprecationError",
        NOT_A_FOREST_ROOT_ERROR => "NotAForestRootError",
        EXECUTION_ERROR => "ExecutionError",
        NOT_FOUND => "NotFound",
        DUPLICATE_ENTRY => "DuplicateEntry",
        HOST_SERVICE => "HostService",
        MALFORMED_SERVICE_PRINCIPAL => "MalformedServicePrincipal",
        REALM_MISMATCH => "RealmMismatch",
        REQUIRES_ROOT => "RequiresRoot",
        ALREADY_POSIX_GROUP => "AlreadyPosixGroup",
        MALFORMED_USER_PRINCIPAL => "MalformedUserPrincipal",
        ALREADY_ACTIVE => "AlreadyActive",
        ALREADY_INACTIVE => "AlreadyInactive",
        HAS_NS_ACCOUNT_LOCK => "HasNSAccountLock",
        NOT_GROUP_MEMBER => "NotGroupMember",
        RECURSIVE_GROUP => "RecursiveGroup",
        ALREADY_GROUP_MEMBER => "AlreadyGroupMember",
        BASE64_DECODE_ERROR => "Base64DecodeError",
        REMOTE_RETRIEVE_ERROR => "RemoteRetrieveError",
        SAME_GROUP_ERROR => "SameGroupError",
        DEFAULT_GROUP_ERROR => "DefaultGroupError",
        DNS_NOT_A_RECORD_ERROR => "DNSNotARecordError",
        MANAGED_GROUP_ERROR => "ManagedGroupError",
        MANAGED_POLICY_ERROR => "ManagedPolicyError",
        FILE_ERROR => "FileError",
        NO_CERTIFICATE_ERROR => "NoCertificateError",
        MANAGED_GROUP_EXISTS_ERROR => "ManagedGroupExistsError",
        REVERSE_MEMBER_ERROR => "ReverseMemberError",
        ATTR_VALUE_NOT_FOUND => "AttrValueNotFound",
        SINGLE_MATCH_EXPECTED => "SingleMatchExpected",
        ALREADY_EXTERNAL_GROUP => "AlreadyExternalGroup",
        EXTERNAL_GROUP_VIOLATION => "ExternalGroupViolation",
        POSIX_GROUP_VIOLATION => "PosixGroupViolation",
        EMPTY_RESULT => "EmptyResult",
        INVALID_DOMAIN_LEVEL_ERROR => "InvalidDomainLevelError",
        SERVER_REMOVAL_ERROR => "ServerRemovalError",
        OPERATION_NOT_SUPPORTED_FOR_PRINCIPAL_TYPE => "OperationNotSupportedForPrincipalType",
        HTTP_REQUEST_ERROR => "HTTPRequestError",
        REDUNDANT_MAPPING_RULE => "RedundantMappingRule",
        CSR_TEMPLATE_ERROR => "CSRTemplateError",
        ALREADY_CONTAINS_VALUE_ERROR => "AlreadyContainsValueError",
        BUILTIN_ERROR => "BuiltinError",
        HELP_ERROR => "HelpError",
        LDAP_ERROR => "LDAPError",
        MIDAIR_COLLISION => "MidairCollision",
        EMPTY_MODLIST => "EmptyModlist",
        DATABASE_ERROR => "DatabaseError",
        LIMITS_EXCEEDED => "LimitsExceeded",
        OBJECTCLASS_VIOLATION => "ObjectclassViolation",
        NOT_ALLOWED_ON_RDN => "NotAllowedOnRDN",
        ONLY_ONE_VALUE_ALLOWED => "OnlyOneValueAllowed",
        INVALID_SYNTAX => "InvalidSyntax",
        BAD_SEARCH_FILTER => "BadSearchFilter",
        NOT_ALLOWED_ON_NON_LEAF => "NotAllowedOnNonLeaf",
        DATABASE_TIMEOUT => "DatabaseTimeout",
        DNS_DATA_MISMATCH => "DNSDataMismatch",
        TASK_TIMEOUT => "TaskTimeout",
        TIME_LIMIT_EXCEEDED => "TimeLimitExceeded",
        SIZE_LIMIT_EXCEEDED => "SizeLimitExceeded",
        ADMIN_LIMIT_EXCEEDED => "AdminLimitExceeded",
        CERTIFICATE_ERROR => "CertificateError",
        CERTIFICATE_OPERATION_ERROR => "CertificateOperationError",
        CERTIFICATE_FORMAT_ERROR => "CertificateFormatError",
        MUTUALLY_EXCLUSIVE_ERROR => "MutuallyExclusiveError",
        NON_FATAL_ERROR => "NonFatalError",
        ALREADY_REGISTERED_ERROR => "AlreadyRegisteredError",
        NOT_REGISTERED_ERROR => "NotRegisteredError",
        DEPENDENT_ENTRY => "DependentEntry",
        LAST_MEMBER_ERROR => "LastMemberError",
        PROTECTED_ENTRY_ERROR => "ProtectedEntryError",
        CERTIFICATE_INVALID_ERROR => "CertificateInvalidError",
        SCHEMA_UP_TO_DATE => "SchemaUpToDate",
        DNS_ERROR => "DNSError",
        DNS_RESOLVER_ERROR => "DNSResolverError",
        TRUST_ERROR => "TrustError",
        TRUST_TOPOLOGY_CONFLICT_ERROR => "TrustTopologyConflictError",
        GENERIC_ERROR => "GenericError",
        _ => return None,
    };
    Some(name)
}
