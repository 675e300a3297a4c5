//! End-to-end tests for the interactive shell.
//!
//! Each test scripts a full session: command lines (and search follow-up
//! answers) go in through a cursor, and the complete transcript comes
//! back out of an in-memory writer.

use std::io::Cursor;

use vidsh::catalog::{Video, VideoCatalog};
use vidsh::Shell;

fn demo_catalog() -> VideoCatalog {
    VideoCatalog::new(vec![
        Video::new("cats_id", "Amazing Cats", ["#cat", "#animal"]),
        Video::new("more_cats_id", "Another Cat Video", ["#cat", "#animal"]),
        Video::new("dogs_id", "Funny Dogs", ["#dog", "#animal"]),
        Video::new("jazz_id", "Rainy Day Jazz", [] as [&str; 0]),
    ])
}

/// Runs a scripted session and returns the transcript minus the banner.
fn run_session(script: &str) -> String {
    let mut output = Vec::new();
    {
        let mut shell = Shell::new(demo_catalog(), Cursor::new(script.to_string()), &mut output);
        shell.run().unwrap();
    }
    let transcript = String::from_utf8(output).unwrap();
    let (banner, rest) = transcript.split_once('\n').unwrap();
    assert!(banner.contains("HELP"));
    rest.to_string()
}

#[test]
fn number_of_videos_counts_the_catalog() {
    let out = run_session("NUMBER_OF_VIDEOS\nEXIT\n");
    assert_eq!(out, "4 videos in the library\n");
}

#[test]
fn show_all_videos_lists_in_title_order() {
    let out = run_session("SHOW_ALL_VIDEOS\nEXIT\n");
    assert_eq!(
        out,
        "Here's a list of all available videos:\n\
         Amazing Cats (cats_id) [#cat #animal]\n\
         Another Cat Video (more_cats_id) [#cat #animal]\n\
         Funny Dogs (dogs_id) [#dog #animal]\n\
         Rainy Day Jazz (jazz_id) []\n"
    );
}

#[test]
fn play_switch_emits_stop_then_play() {
    let out = run_session("PLAY cats_id\nPLAY dogs_id\nEXIT\n");
    assert_eq!(
        out,
        "Playing video: Amazing Cats\n\
         Stopping video: Amazing Cats\n\
         Playing video: Funny Dogs\n"
    );
}

#[test]
fn play_reports_unknown_and_flagged_videos() {
    let out = run_session("PLAY missing_id\nFLAG_VIDEO cats_id spam\nPLAY cats_id\nEXIT\n");
    assert!(out.contains("Cannot play video: Video does not exist\n"));
    assert!(out.contains("Cannot play video: Video is currently flagged (reason: spam)\n"));
}

#[test]
fn stop_without_playback_is_reported() {
    let out = run_session("STOP\nEXIT\n");
    assert_eq!(out, "Cannot stop video: No video is currently playing\n");
}

#[test]
fn pause_twice_reports_already_paused() {
    let out = run_session("PLAY cats_id\nPAUSE\nPAUSE\nEXIT\n");
    assert_eq!(
        out,
        "Playing video: Amazing Cats\n\
         Pausing video: Amazing Cats\n\
         Video already paused: Amazing Cats\n"
    );
}

#[test]
fn continue_matrix_covers_all_three_cases() {
    let out = run_session("CONTINUE\nPLAY cats_id\nCONTINUE\nPAUSE\nCONTINUE\nEXIT\n");
    assert_eq!(
        out,
        "Cannot continue video: No video is currently playing\n\
         Playing video: Amazing Cats\n\
         Cannot continue video: Video is not paused\n\
         Pausing video: Amazing Cats\n\
         Continuing video: Amazing Cats\n"
    );
}

#[test]
fn show_playing_includes_tags_and_paused_suffix() {
    let out = run_session("SHOW_PLAYING\nPLAY cats_id\nSHOW_PLAYING\nPAUSE\nSHOW_PLAYING\nEXIT\n");
    assert!(out.starts_with("No video is currently playing\n"));
    assert!(out.contains("Currently playing: Amazing Cats (cats_id) [#cat #animal]\n"));
    assert!(out.contains("Currently playing: Amazing Cats (cats_id) [#cat #animal] - PAUSED\n"));
}

#[test]
fn play_random_with_one_candidate_is_deterministic() {
    let out = run_session(
        "FLAG_VIDEO cats_id\nFLAG_VIDEO more_cats_id\nFLAG_VIDEO dogs_id\nPLAY_RANDOM\nEXIT\n",
    );
    assert!(out.ends_with("Playing video: Rainy Day Jazz\n"));
}

#[test]
fn play_random_with_everything_flagged_reports_no_videos() {
    let out = run_session(
        "FLAG_VIDEO cats_id\nFLAG_VIDEO more_cats_id\nFLAG_VIDEO dogs_id\nFLAG_VIDEO jazz_id\nPLAY_RANDOM\nEXIT\n",
    );
    assert!(out.ends_with("No videos available\n"));
}

#[test]
fn playlist_lifecycle_round_trip() {
    let out = run_session(
        "CREATE_PLAYLIST road_trip\n\
         CREATE_PLAYLIST ROAD_TRIP\n\
         ADD_TO_PLAYLIST road_trip cats_id\n\
         ADD_TO_PLAYLIST road_trip cats_id\n\
         SHOW_PLAYLIST road_trip\n\
         REMOVE_FROM_PLAYLIST road_trip cats_id\n\
         SHOW_PLAYLIST road_trip\n\
         DELETE_PLAYLIST road_trip\n\
         SHOW_PLAYLIST road_trip\n\
         EXIT\n",
    );
    assert_eq!(
        out,
        "Successfully created new playlist: road_trip\n\
         Cannot create playlist: A playlist with the same name already exists\n\
         Added video to road_trip: Amazing Cats\n\
         Cannot add video to road_trip: Video already added\n\
         Showing playlist: road_trip\n\
         Amazing Cats (cats_id) [#cat #animal]\n\
         Removed video from road_trip: Amazing Cats\n\
         Showing playlist: road_trip\n\
         No videos here yet\n\
         Deleted playlist: road_trip\n\
         Cannot show playlist road_trip: Playlist does not exist\n"
    );
}

#[test]
fn show_all_playlists_sorts_case_insensitively() {
    let out = run_session(
        "SHOW_ALL_PLAYLISTS\n\
         CREATE_PLAYLIST funny\n\
         CREATE_PLAYLIST ANIMALS\n\
         CREATE_PLAYLIST Boring\n\
         SHOW_ALL_PLAYLISTS\n\
         EXIT\n",
    );
    assert!(out.starts_with("No playlists exist yet\n"));
    assert!(out.ends_with(
        "Showing all playlists:\n\
         ANIMALS\n\
         Boring\n\
         funny\n"
    ));
}

#[test]
fn playlist_names_are_echoed_as_typed() {
    let out = run_session(
        "CREATE_PLAYLIST MyMix\nADD_TO_PLAYLIST MYMIX cats_id\nCLEAR_PLAYLIST mymix\nEXIT\n",
    );
    assert_eq!(
        out,
        "Successfully created new playlist: MyMix\n\
         Added video to MYMIX: Amazing Cats\n\
         Successfully removed all videos from mymix\n"
    );
}

#[test]
fn search_lists_matches_and_plays_the_selection() {
    let out = run_session("SEARCH_VIDEOS cat\n2\nEXIT\n");
    assert_eq!(
        out,
        "Here are the results for cat:\n\
         1) Amazing Cats (cats_id) [#cat #animal]\n\
         2) Another Cat Video (more_cats_id) [#cat #animal]\n\
         Would you like to play any of the above? If yes, specify the number of the video.\n\
         If your answer is not a valid number, we will assume it's a no.\n\
         Playing video: Another Cat Video\n"
    );
}

#[test]
fn search_with_no_results_reads_no_input() {
    // If the search consumed a line, PLAY would be swallowed as the answer.
    let out = run_session("SEARCH_VIDEOS zzz-no-match\nPLAY cats_id\nEXIT\n");
    assert_eq!(
        out,
        "No search results for zzz-no-match\n\
         Playing video: Amazing Cats\n"
    );
}

#[test]
fn search_discards_invalid_and_out_of_range_answers() {
    let out = run_session("SEARCH_VIDEOS cat\nnope\nSHOW_PLAYING\nEXIT\n");
    assert!(out.ends_with("No video is currently playing\n"));

    let out = run_session("SEARCH_VIDEOS cat\n9\nSHOW_PLAYING\nEXIT\n");
    assert!(out.ends_with("No video is currently playing\n"));
}

#[test]
fn search_by_tag_matches_exact_tags_only() {
    let out = run_session("SEARCH_VIDEOS_WITH_TAG #dog\n\nEXIT\n");
    assert!(out.starts_with(
        "Here are the results for #dog:\n\
         1) Funny Dogs (dogs_id) [#dog #animal]\n"
    ));

    let out = run_session("SEARCH_VIDEOS_WITH_TAG #do\nEXIT\n");
    assert_eq!(out, "No search results for #do\n");
}

#[test]
fn search_excludes_flagged_videos() {
    let out = run_session("FLAG_VIDEO cats_id\nSEARCH_VIDEOS cat\n\nEXIT\n");
    assert!(out.contains("1) Another Cat Video (more_cats_id) [#cat #animal]\n"));
    assert!(!out.contains("Amazing Cats (cats_id)"));
}

#[test]
fn flagging_the_playing_video_stops_it_first() {
    let out = run_session("PLAY cats_id\nFLAG_VIDEO cats_id dont_like\nSHOW_PLAYING\nEXIT\n");
    assert_eq!(
        out,
        "Playing video: Amazing Cats\n\
         Stopping video: Amazing Cats\n\
         Successfully flagged video: Amazing Cats (reason: dont_like)\n\
         No video is currently playing\n"
    );
}

#[test]
fn flag_without_reason_uses_the_default() {
    let out = run_session("FLAG_VIDEO jazz_id\nSHOW_ALL_VIDEOS\nEXIT\n");
    assert!(out.starts_with("Successfully flagged video: Rainy Day Jazz (reason: Not supplied)\n"));
    assert!(out.contains("Rainy Day Jazz (jazz_id) [] - FLAGGED (reason: Not supplied)\n"));
}

#[test]
fn flag_reason_may_contain_spaces() {
    let out = run_session("FLAG_VIDEO jazz_id not jazzy enough\nEXIT\n");
    assert_eq!(
        out,
        "Successfully flagged video: Rainy Day Jazz (reason: not jazzy enough)\n"
    );
}

#[test]
fn flagged_video_cannot_join_playlists_but_stays_in_old_ones() {
    let out = run_session(
        "CREATE_PLAYLIST mix\n\
         ADD_TO_PLAYLIST mix cats_id\n\
         FLAG_VIDEO cats_id spam\n\
         ADD_TO_PLAYLIST mix dogs_id\n\
         FLAG_VIDEO dogs_id\n\
         SHOW_PLAYLIST mix\n\
         EXIT\n",
    );
    // Already-member cats_id stays listed (with its flag note); a newly
    // flagged video can still be seen but no flagged video can be added.
    assert!(out.contains("Amazing Cats (cats_id) [#cat #animal] - FLAGGED (reason: spam)\n"));

    let out = run_session(
        "CREATE_PLAYLIST mix\nFLAG_VIDEO cats_id spam\nADD_TO_PLAYLIST mix cats_id\nEXIT\n",
    );
    assert!(out
        .ends_with("Cannot add video to mix: Video is currently flagged (reason: spam)\n"));
}

#[test]
fn allow_restores_playability_and_reports_errors() {
    let out = run_session(
        "ALLOW_VIDEO missing_id\n\
         ALLOW_VIDEO cats_id\n\
         FLAG_VIDEO cats_id\n\
         ALLOW_VIDEO cats_id\n\
         PLAY cats_id\n\
         EXIT\n",
    );
    assert_eq!(
        out,
        "Cannot remove flag from video: Video does not exist\n\
         Cannot remove flag from video: Video is not flagged\n\
         Successfully flagged video: Amazing Cats (reason: Not supplied)\n\
         Successfully removed flag from video: Amazing Cats\n\
         Playing video: Amazing Cats\n"
    );
}

#[test]
fn flag_and_allow_check_existence_first() {
    let out = run_session("FLAG_VIDEO missing_id why\nFLAG_VIDEO cats_id\nFLAG_VIDEO cats_id\nEXIT\n");
    assert_eq!(
        out,
        "Cannot flag video: Video does not exist\n\
         Successfully flagged video: Amazing Cats (reason: Not supplied)\n\
         Cannot flag video: Video is already flagged\n"
    );
}

#[test]
fn bad_input_lines_produce_diagnostics_and_the_loop_continues() {
    let out = run_session("\nFROB\nPLAY\nNUMBER_OF_VIDEOS\nEXIT\n");
    assert_eq!(
        out,
        "Unknown command: FROB. Type HELP for a list of available commands.\n\
         PLAY requires a video id (usage: PLAY <video_id>)\n\
         4 videos in the library\n"
    );
}

#[test]
fn help_lists_every_command() {
    let out = run_session("HELP\nEXIT\n");
    for word in [
        "NUMBER_OF_VIDEOS",
        "SHOW_ALL_VIDEOS",
        "PLAY",
        "STOP",
        "PLAY_RANDOM",
        "PAUSE",
        "CONTINUE",
        "SHOW_PLAYING",
        "CREATE_PLAYLIST",
        "ADD_TO_PLAYLIST",
        "REMOVE_FROM_PLAYLIST",
        "CLEAR_PLAYLIST",
        "DELETE_PLAYLIST",
        "SHOW_ALL_PLAYLISTS",
        "SHOW_PLAYLIST",
        "SEARCH_VIDEOS",
        "SEARCH_VIDEOS_WITH_TAG",
        "FLAG_VIDEO",
        "ALLOW_VIDEO",
        "HELP",
        "EXIT",
    ] {
        assert!(out.contains(word), "HELP is missing {word}");
    }
}

#[test]
fn session_ends_at_eof_without_exit() {
    let out = run_session("NUMBER_OF_VIDEOS\n");
    assert_eq!(out, "4 videos in the library\n");
}
