mod clock_time;
