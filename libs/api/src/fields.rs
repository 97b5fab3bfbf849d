//! Field selection forwarded to the provider.
//!
//! The shape of the returned records is driven entirely by these lists; the
//! rest of the crate treats tweets and profile data as opaque payloads.

/// `tweet.fields` requested on every tweet-bearing endpoint.
pub const TWEET_FIELDS: &str = "attachments,author_id,context_annotations,conversation_id,created_at,entities,geo,id,in_reply_to_user_id,lang,possibly_sensitive,public_metrics,referenced_tweets,reply_settings,source,text,withheld";

/// `user.fields` requested on every user-bearing endpoint.
pub const USER_FIELDS: &str = "created_at,description,entities,id,location,name,pinned_tweet_id,profile_image_url,protected,public_metrics,url,username,verified,withheld";

/// `expansions` for the user lookup.
pub const USER_EXPANSIONS: &str = "pinned_tweet_id";

/// `expansions` for timeline pages.
pub const TIMELINE_EXPANSIONS: &str = "attachments.media_keys,attachments.poll_ids,author_id,entities.mentions.username,geo.place_id,in_reply_to_user_id,referenced_tweets.id,referenced_tweets.id.author_id";

/// `media.fields` for timeline pages.
pub const MEDIA_FIELDS: &str = "alt_text,duration_ms,height,media_key,non_public_metrics,organic_metrics,preview_image_url,public_metrics,type,url,width";

/// `place.fields` for timeline pages.
pub const PLACE_FIELDS: &str = "contained_within,country,country_code,full_name,geo,id,name,place_type";

/// `poll.fields` for timeline pages.
pub const POLL_FIELDS: &str = "duration_minutes,end_datetime,id,options,voting_status";
