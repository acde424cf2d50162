mod user_record;
