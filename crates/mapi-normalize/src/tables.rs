//! Rewrite tables for the two filter banks.
//!
//! These lists were tuned against the names found in the published MAPI
//! headers and protocol documents. Order inside a list matters: every rule
//! sees the output of the rules above it.

use mapi_model::OriginKind;

use crate::filters::{FilterBank, FilterRule, rule};

/// Inserts `_` at known joined-word boundaries.
pub static WORD_SPLITTER_BANK: FilterBank = FilterBank::new(
    &[
        (OriginKind::PrTag, PR_TAG_SPLITS),
        (OriginKind::PidTag, PID_TAG_SPLITS),
        (OriginKind::PTag, PTAG_SPLITS),
    ],
    ANY_SPLITS,
);

/// Expands or contracts domain abbreviations to one spelling.
pub static ABBREVIATION_BANK: FilterBank = FilterBank::new(
    &[
        (OriginKind::PrTag, PR_TAG_ABBREVIATIONS),
        (OriginKind::PidTag, PID_TAG_ABBREVIATIONS),
    ],
    ANY_ABBREVIATIONS,
);

const PR_TAG_SPLITS: &[FilterRule] = &[
    rule("emsmdb", "ems_mdb"),
    rule("addrtype", "addr_type"),
    rule("oraddress", "or_address"),
    rule("storeeid", "store_eid"),
    rule("_svreid", "_svr_eid"),
    rule("seqid", "seq_id"),
    rule("draftid", "draft_id"),
    rule("srchid", "srch_id"),
    rule("oflid", "ofl_id"),
    rule("entryid", "entry_id"),
    rule("linkid", "link_id"),
    rule("replacetime", "replace_time"),
    rule("trackstatus", "track_status"),
    rule("clientid", "client_id"),
    rule("parentid", "parent_id"),
    rule("enabledon", "enabled_on"),
    rule("onserver", "on_server"),
    rule("schdinfo_", "schd_info_"),
    rule("_freebusy_", "_free_busy_"),
    rule("_mtsout_", "_mts_out_"),
    rule("_mtsin_", "_mts_in_"),
    rule("xmlstream", "xml_stream"),
    rule("containerid", "container_id"),
    rule("templateid", "template_id"),
    rule("proposedendtime", "proposed_end_time"),
    rule("proposedstarttime", "proposed_starttime"),
    rule("starttime", "start_time"),
    rule("contactphoto", "contact_photo"),
    rule("freebusy", "free_busy"),
    rule("sendpost", "send_post"),
    rule("readpost", "read_post"),
    rule("reportnote", "report_note"),
    rule("sendnote", "send_note"),
    rule("readnote", "read_note"),
    rule("endtxt", "end_txt"),
    rule("begintxt", "begin_txt"),
    rule("bodytag", "body_tag"),
    rule("migrateprofile", "migrate_profile"),
    rule("changenum", "change_num"),
    rule("versionhistory", "version_history"),
    rule("versionskeleton", "version_skeleton"),
    rule("serverid", "server_id"),
    rule("subitemid", "subitem_id"),
    rule("inetmail", "inet_mail"),
    rule("dotstuff", "dot_stuff"),
    rule("newsfeed", "news_feed"),
    rule("peruser", "per_user"),
    rule("mailbeat", "mail_beat"),
    rule("hotsite", "hot_site"),
    rule("endtime", "end_time"),
    rule("fixfont", "fix_font"),
    rule("ccwrap", "cc_wrap"),
    rule("metatag", "meta_tag"),
    rule("iconurl", "icon_url"),
    rule("itemproc", "item_proc"),
    rule("viewinfo", "view_info"),
    rule("displayname", "display_name"),
    rule("fxsrcstream", "fx_src_stream"),
    rule("fxdeststream", "fx_dest_stream"),
    rule("othermailbox", "other_mailbox"),
    rule("viewprivate", "view_private"),
    rule("foldertype", "folder_type"),
    rule("viewtype", "view_type"),
    rule("ostid", "ost_id"),
    rule("shareddata", "shared_data"),
    rule("notfound", "not_found"),
    rule("mapiuid", "mapi_uid"),
    rule("mapiform", "mapi_form"),
    rule("phonebook", "phone_book"),
    rule("testclsid", "test_clsid"),
    rule("labeleduri", "labeled_uri"),
    rule("dispname", "disp_name"),
    rule("syncevent", "sync_event"),
    rule("slowlink", "slow_link"),
    rule("dialup", "dial_up"),
    rule("waitfor", "wait_for"),
    rule("mimewrap", "mime_wrap"),
    rule("tcpip", "tcp_ip"),
    rule("traceinfo", "trace_info"),
    rule("spamtype", "spam_type"),
    rule("userfields", "user_fields"),
    rule("viewlist", "view_list"),
    rule("clearprops", "clear_props"),
    rule("logfile", "log_file"),
    rule("deltax", "delta_x"),
    rule("deltay", "delta_y"),
    rule("xpos", "x_pos"),
    rule("ypos", "y_pos"),
    rule("mailfrom", "mail_from"),
    rule("datainit", "data_init"),
    rule("dataterm", "data_term"),
    rule("outq_", "out_q_"),
    rule("inq_", "in_q_"),
    rule("datablock", "data_block"),
    rule("viewflags", "view_flags"),
    rule("saveas", "save_as"),
    rule("folderid", "folder_id"),
    rule("portno", "port_no"),
    rule("bifinfo", "bif_info"),
    rule("msgtracking", "msg_tracking"),
    rule("autoresponse", "auto_response"),
    rule("favfld", "fav_fld"),
    rule("bodypart", "body_part"),
    rule("listinfo", "list_info"),
    rule("reqcn", "req_cn"),
    rule("reqname", "req_name"),
    rule("insadmin", "ins_admin"),
];

const PID_TAG_SPLITS: &[FilterRule] = &[
    rule("_un_modified", "_unmodified"),
    rule("msgid", "msg_id"),
    rule("itemid", "item_id"),
    rule("replid", "repl_id"),
    rule("guid", "guid_"),
];

const PTAG_SPLITS: &[FilterRule] = &[
    rule("replid", "repl_id"),
];

const ANY_SPLITS: &[FilterRule] = &[
    rule("temporaryflags", "temporary_flags"),
    rule("errorinfo", "error_info"),
    rule("msgsize", "msg_size"),
    rule("attachlist", "attach_list"),
    rule("changenum", "change_num"),
    rule("addrbook", "addr_book"),
    rule("rootdir", "root_dir"),
    rule("msgclass", "msg_class"),
    rule("messageclass", "message_class"),
    rule("mtsid", "mts_id"),
    rule("sentmail", "sent_mail"),
    rule("to_do_", "todo_"),
    rule("subfolder", "sub_folder"),
    rule("rowid", "row_id"),
    rule("recurrenceid", "recurrence_id"),
    rule("readonly", "read_only"),
    rule("pathname", "path_name"),
    rule("templateid", "template_id"),
    rule("datatype", "data_type"),
    rule("codepage", "code_page"),
    rule("_replid", "_repl_id"),
    rule("webviewinfo", "webview_info"),
    rule("webview", "web_view"),
    rule("mailuser", "mail_user"),
    rule("longterm", "long_term"),
    rule("newsfeed", "news_feed"),
];

const PR_TAG_ABBREVIATIONS: &[FilterRule] = &[
    rule("_oab_", "_offline_address_book_"),
    rule("ems_ab_", "address_book_"),
    rule("_addr_", "_address_"),
    rule("_auth_", "_authorized_"),
    rule("_deliv_", "_delivery_"),
    rule("abeid", "address_book_eid"),
    rule("_eid", "_entry_id"),
    rule("splus", "schd_plus"),
    rule("_hab_", "_hier_"),
    rule("_dl", "_distr_list"),
    rule("_mhs_", "_message_handling_system_"),
    rule("_mta", "_message_transfer_agent"),
    rule("_reckey", "_record_key"),
    rule("wb_sf_", "wb_search_folder_"),
    rule("_cont_", "_content_"),
    rule("_eid", "_entry_id"),
    rule("loglev", "log_level"),
    rule("vrfy", "verify"),
    rule("_hdrs_", "_headers_"),
];

const PID_TAG_ABBREVIATIONS: &[FilterRule] = &[
    rule("security_descriptor", "nt_security_descriptor"),
    rule("_distribution_list", "_distr_list"),
    rule("_unauthorized_", "_unauth_"),
    rule("_away", "oof"),
    rule("_t_bl_", "_table_"),
];

const ANY_ABBREVIATIONS: &[FilterRule] = &[
    rule("appointment", "appt"),
    rule("certificate", "cert"),
    rule("recipient_", "rcpt_"),
    rule("access_control_list_", "acl_"),
    rule("hierarchical", "hier"),
    rule("address", "addr"),
    rule("message", "msg"),
    rule("hasattach", "has_attachments"),
    rule("_extended", "_ex"),
    rule("_eid", "_entry_id"),
    rule("_telephone_", "_phone_"),
    rule("received_", "rcvd_"),
    rule("number", "num"),
    rule("_object_", "_obj_"),
    rule("_message_", "_msg_"),
    rule("internet", "inet"),
    rule("acct", "account"),
    rule("maximum", "max"),
    rule("minimum", "min"),
    rule("transmitable", "transmittable"),
    rule("_binary", "_bin"),
    rule("_mid_", "_msg_id_"),
    rule("_cpid", "_code_page_id"),
    rule("dam_", "deferred_action_message_"),
    rule("attribute", "attr"),
    rule("schedule_", "schd_"),
];

