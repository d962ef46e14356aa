//! Pluggable dictionary word segmentation and its correction table.

use std::sync::LazyLock;

use crate::numerals::attach_number;

/// Splits a joined lower-case word into probable words.
///
/// Implementations never fail; a wrong guess is patched afterwards by
/// [`fix_after_segmentation`].
pub trait Segmenter: Send + Sync {
    /// Returns `word` with `_` between the guessed words.
    fn segment(&self, word: &str) -> String;
}

impl<F> Segmenter for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn segment(&self, word: &str) -> String {
        self(word)
    }
}

/// Splits the segmenter is known to get wrong on MAPI names. Each is undone
/// by removing its underscores.
pub const FALSE_POSITIVES: &[&str] = &[
    "corre_lat_or", "e_its", "in_it", "i_pms", "rec_ip", "i_pm", "x_400", "x_500", "x_509",
    "x_25", "rfc_1006", "a_ddr", "re_pl", "rc_vd", "a_ppt", "tn_ef", "ds_a", "fr_eq", "a_lg",
    "auto_reply", "time_out", "a_ck", "re_cv", "rcp_t", "canonical_iz_ation", "map_i", "tn_s",
    "e_smtp", "e_trn", "s_mime", "synchronize_r", "rt_f", "acc_t", "gui_d", "mid_set", "x_mt",
    "sch_d", "spool_er", "nts_d", "n_td_n", "s_rc", "s_can", "de_st", "i_mail", "rm_q",
    "x_ref", "t_bl", "ow_a", "at_tr", "p_1", "u_id", "cl_sid", "out_box", "m_db", "as_soc",
    "p_2", "pre_c", "loop_back", "re_calc", "de_queue", "m_gr", "au_th", "start_tls",
    "ku_lane", "dia_g", "d_is_tr", "n_ntp", "if_s", "an_r", "c_dorm", "c_doo_or", "cd_of_bc",
    "s_vr", "transmit_able", "tty_tdd", "pa_b", "a_cl", "du_a", "ad_atp_3", "con_v", "p_km",
    "version_ing", "l_cid", "in_cr", "re_q", "rg_m", "c_pid", "fl_d", "ex_ch_50", "mb_in",
    "addr_s", "o_of", "sr_ch", "o_ab", "of_l", "open_ning", "encrypt_er", "fa_v", "m_sdos",
    "dx_a", "roll_over", "back_off", "de_sig", "una_u_th", "x_121", "xm_it", "l_dap", "cf_g",
    "adr_s", "mt_s", "pui_d", "mon_the_s", "x_view", "log_on", "cate_g", "back_fill", "in_st",
    "de_liv", "appt_s", "del_s", "reqc_n", "telet_ex",
];

static CORRECTIONS: LazyLock<Vec<(&'static str, String)>> = LazyLock::new(|| {
    FALSE_POSITIVES
        .iter()
        .map(|split| (*split, split.replace('_', "")))
        .collect()
});

/// Applies the correction table in order, then numeral reattachment.
pub fn fix_after_segmentation(name: &str) -> String {
    let corrected = CORRECTIONS
        .iter()
        .fold(name.to_string(), |acc, (split, joined)| {
            acc.replace(split, joined)
        });
    attach_number(&corrected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrections_rejoin_known_false_splits() {
        assert_eq!(fix_after_segmentation("map_i_form"), "mapi_form");
        assert_eq!(fix_after_segmentation("x_400_address"), "x400_address");
        assert_eq!(fix_after_segmentation("out_box_entry_id"), "outbox_entry_id");
    }

    #[test]
    fn reattaches_numbers_after_corrections() {
        assert_eq!(fix_after_segmentation("home_fax_2"), "home_fax2");
    }

    #[test]
    fn table_entries_are_all_split_forms() {
        for split in FALSE_POSITIVES {
            assert!(split.contains('_'), "{split}");
            assert!(!split.starts_with('_') && !split.ends_with('_'), "{split}");
        }
    }

    #[test]
    fn closures_are_segmenters() {
        let seg = |word: &str| word.replace("mail", "mail_");
        assert_eq!(seg.segment("mailbox"), "mail_box");
    }
}
